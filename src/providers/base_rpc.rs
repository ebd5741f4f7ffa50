use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

use crate::{
    config::BaseSettings,
    models::{AuraError, Result},
    providers::{
        client::OnchainProvider,
        resilience::{retry_with_backoff, RetryConfig},
    },
};

const CHAIN: &str = "base";

/// Base (L2) activity via plain JSON-RPC.
pub struct BaseRpcClient {
    http_client: reqwest::Client,
    rpc_url: String,
    retry: RetryConfig,
}

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: serde_json::Value,
}

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

impl BaseRpcClient {
    pub fn new(config: &BaseSettings, retry: RetryConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AuraError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            rpc_url: config.rpc_url.clone(),
            retry,
        })
    }

    async fn make_rpc_request<T: DeserializeOwned>(&self, method: &str, params: serde_json::Value) -> Result<T> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        };

        let response = self
            .http_client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| rpc_error(format!("HTTP request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AuraError::RateLimitExceeded { service: format!("{} rpc", CHAIN) });
        }

        let rpc_response: RpcResponse<T> = response
            .json()
            .await
            .map_err(|e| rpc_error(format!("Failed to parse response: {}", e)))?;

        if let Some(error) = rpc_response.error {
            return Err(rpc_error(format!("RPC error {}: {}", error.code, error.message)));
        }

        rpc_response
            .result
            .ok_or_else(|| rpc_error("Empty result from RPC".to_string()))
    }

    /// Nonce of `address`, i.e. the number of transactions it has sent.
    pub async fn get_transaction_count(&self, address: &str) -> Result<u64> {
        validate_address(address)?;

        let params = json!([address, "latest"]);
        let quantity: String = retry_with_backoff(&self.retry, "base_get_transaction_count", || {
            self.make_rpc_request("eth_getTransactionCount", params.clone())
        })
        .await?;

        let count = parse_quantity(&quantity)?;
        debug!("{} has sent {} transactions on {}", address, count, CHAIN);
        Ok(count)
    }
}

#[async_trait]
impl OnchainProvider for BaseRpcClient {
    fn chain(&self) -> &'static str {
        CHAIN
    }

    async fn transaction_count(&self, addresses: &[String]) -> Result<u64> {
        let mut total = 0u64;
        for address in addresses {
            match validate_address(address) {
                Ok(()) => total = total.saturating_add(self.get_transaction_count(address).await?),
                Err(e) => warn!("Skipping address: {}", e),
            }
        }
        Ok(total)
    }
}

fn rpc_error(message: String) -> AuraError {
    AuraError::RpcError {
        chain: CHAIN.to_string(),
        message,
    }
}

pub fn validate_address(address: &str) -> Result<()> {
    let hex = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| AuraError::InvalidInput(format!("Invalid EVM address: {}", address)))?;

    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AuraError::InvalidInput(format!("Invalid EVM address: {}", address)));
    }
    Ok(())
}

/// Parse a JSON-RPC hex quantity such as `"0x1a"`.
pub fn parse_quantity(quantity: &str) -> Result<u64> {
    let digits = quantity
        .strip_prefix("0x")
        .ok_or_else(|| rpc_error(format!("Malformed quantity: {}", quantity)))?;
    if digits.is_empty() {
        return Err(rpc_error(format!("Malformed quantity: {}", quantity)));
    }
    u64::from_str_radix(digits, 16).map_err(|e| rpc_error(format!("Malformed quantity {}: {}", quantity, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0x0").unwrap(), 0);
        assert_eq!(parse_quantity("0x1a").unwrap(), 26);
        assert_eq!(parse_quantity("0xFF").unwrap(), 255);
        assert!(parse_quantity("26").is_err());
        assert!(parse_quantity("0x").is_err());
        assert!(parse_quantity("0xzz").is_err());
    }

    #[test]
    fn test_address_validation() {
        assert!(validate_address("0x742d35Cc6634C0532925a3b844Bc9e7595f6e842").is_ok());
        assert!(validate_address("742d35Cc6634C0532925a3b844Bc9e7595f6e842").is_err());
        assert!(validate_address("0x742d35").is_err());
        assert!(validate_address("0xg42d35Cc6634C0532925a3b844Bc9e7595f6e842").is_err());
    }

    #[tokio::test]
    async fn test_invalid_addresses_are_skipped_without_network() {
        let client = BaseRpcClient::new(&BaseSettings::default(), RetryConfig::default()).unwrap();
        let total = client
            .transaction_count(&["not-an-address".to_string()])
            .await
            .unwrap();
        assert_eq!(total, 0);
        assert_eq!(client.chain(), "base");
    }

    #[test]
    fn test_rpc_response_parsing() {
        let ok: RpcResponse<String> = serde_json::from_str(r#"{"jsonrpc":"2.0","id":1,"result":"0x2a"}"#).unwrap();
        assert_eq!(ok.result.as_deref(), Some("0x2a"));

        let err: RpcResponse<String> =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"invalid argument"}}"#).unwrap();
        assert!(err.result.is_none());
        assert_eq!(err.error.unwrap().code, -32602);
    }
}
