use async_trait::async_trait;
use chrono::Utc;
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Deserialize};
use std::time::Duration;
use tracing::{debug, info};

use crate::{
    config::NeynarSettings,
    models::{AuraError, CastSummary, ProfileStats, Result},
    providers::{
        client::{ProfileLookup, StatsProvider},
        resilience::{retry_with_backoff, RetryConfig},
    },
};

const SERVICE: &str = "neynar";
const MEDIA_EXTENSIONS: [&str; 8] = [".png", ".jpg", ".jpeg", ".gif", ".webp", ".mp4", ".mov", ".m3u8"];

/// Farcaster stats via the Neynar v2 HTTP API.
pub struct NeynarClient {
    http_client: reqwest::Client,
    api_url: String,
    api_key: String,
    cast_limit: u32,
    retry: RetryConfig,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    user: NeynarUser,
}

#[derive(Debug, Deserialize)]
struct BulkUsersResponse {
    #[serde(default)]
    users: Vec<NeynarUser>,
}

#[derive(Debug, Deserialize)]
struct NeynarUser {
    fid: u64,
    username: String,
    display_name: Option<String>,
    #[serde(default)]
    follower_count: u64,
    #[serde(default)]
    verified_addresses: VerifiedAddresses,
}

#[derive(Debug, Default, Deserialize)]
struct VerifiedAddresses {
    #[serde(default)]
    eth_addresses: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CastsResponse {
    #[serde(default)]
    casts: Vec<NeynarCast>,
}

#[derive(Debug, Deserialize)]
struct NeynarCast {
    parent_hash: Option<String>,
    #[serde(default)]
    text: String,
    #[serde(default)]
    embeds: Vec<NeynarEmbed>,
    #[serde(default)]
    reactions: NeynarReactions,
}

#[derive(Debug, Deserialize)]
struct NeynarEmbed {
    url: Option<String>,
    metadata: Option<EmbedMetadata>,
}

#[derive(Debug, Deserialize)]
struct EmbedMetadata {
    content_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct NeynarReactions {
    #[serde(default)]
    likes_count: u64,
    #[serde(default)]
    recasts_count: u64,
}

impl NeynarEmbed {
    fn is_media(&self) -> bool {
        let Some(url) = self.url.as_deref() else {
            // quote-cast embeds carry a cast_id instead of a url
            return false;
        };

        let typed_media = self
            .metadata
            .as_ref()
            .and_then(|m| m.content_type.as_deref())
            .map(|ct| ct.starts_with("image/") || ct.starts_with("video/"))
            .unwrap_or(false);

        let path = url.split(['?', '#']).next().unwrap_or(url).to_ascii_lowercase();
        typed_media || MEDIA_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
    }
}

impl From<&NeynarCast> for CastSummary {
    fn from(cast: &NeynarCast) -> Self {
        CastSummary {
            is_reply: cast.parent_hash.is_some(),
            text_len: cast.text.chars().count(),
            has_media: cast.embeds.iter().any(NeynarEmbed::is_media),
            likes: cast.reactions.likes_count,
            recasts: cast.reactions.recasts_count,
        }
    }
}

impl NeynarClient {
    pub fn new(config: &NeynarSettings, retry: RetryConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                AuraError::MissingCredentials(
                    "Neynar API key is not configured (set NEYNAR_API_KEY)".to_string(),
                )
            })?
            .to_string();

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AuraError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key,
            cast_limit: config.cast_limit,
            retry,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.api_url, path);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header("x-api-key", &self.api_key)
            .header("accept", "application/json")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, path, &body));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn fetch_user(&self, lookup: &ProfileLookup) -> Result<NeynarUser> {
        match lookup {
            ProfileLookup::Username(name) => {
                let query = [("username", name.clone())];
                let response: UserResponse = retry_with_backoff(&self.retry, "neynar_user_by_username", || {
                    self.get_json("/v2/farcaster/user/by_username", &query)
                })
                .await?;
                Ok(response.user)
            }
            ProfileLookup::Fid(fid) => {
                let query = [("fids", fid.to_string())];
                let response: BulkUsersResponse = retry_with_backoff(&self.retry, "neynar_user_bulk", || {
                    self.get_json("/v2/farcaster/user/bulk", &query)
                })
                .await?;
                response
                    .users
                    .into_iter()
                    .next()
                    .ok_or_else(|| AuraError::UserNotFound(lookup.to_string()))
            }
        }
    }

    async fn fetch_casts(&self, fid: u64) -> Result<Vec<CastSummary>> {
        let query = [
            ("fid", fid.to_string()),
            ("limit", self.cast_limit.to_string()),
            ("include_replies", "true".to_string()),
        ];
        let response: CastsResponse = retry_with_backoff(&self.retry, "neynar_user_casts", || {
            self.get_json("/v2/farcaster/feed/user/casts", &query)
        })
        .await?;

        Ok(response.casts.iter().map(CastSummary::from).collect())
    }
}

#[async_trait]
impl StatsProvider for NeynarClient {
    fn service(&self) -> &'static str {
        SERVICE
    }

    async fn fetch_profile(&self, lookup: &ProfileLookup) -> Result<ProfileStats> {
        let user = self.fetch_user(lookup).await?;
        let casts = self.fetch_casts(user.fid).await?;

        info!("Fetched {} casts for @{} (fid {})", casts.len(), user.username, user.fid);

        Ok(ProfileStats {
            fid: user.fid,
            username: user.username,
            display_name: user.display_name,
            followers: user.follower_count,
            verified_addresses: user.verified_addresses.eth_addresses,
            casts,
            base_tx_count: None,
            fetched_at: Utc::now(),
        })
    }
}

fn status_error(status: StatusCode, path: &str, body: &str) -> AuraError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AuraError::Unauthorized(SERVICE.to_string()),
        StatusCode::NOT_FOUND => AuraError::UserNotFound(format!("{} returned 404", path)),
        StatusCode::TOO_MANY_REQUESTS => AuraError::RateLimitExceeded { service: SERVICE.to_string() },
        s if s.is_client_error() => AuraError::InvalidInput(format!("{} rejected request: {}", path, truncate(body))),
        s => AuraError::Provider {
            service: SERVICE.to_string(),
            message: format!("{} returned {}: {}", path, s, truncate(body)),
        },
    }
}

fn truncate(body: &str) -> &str {
    match body.char_indices().nth(200) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
