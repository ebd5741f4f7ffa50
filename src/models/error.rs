use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuraError {
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Unauthorized by {0}: check the API key")]
    Unauthorized(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{service} request failed: {message}")]
    Provider { service: String, message: String },

    #[error("RPC error on {chain}: {message}")]
    RpcError { chain: String, message: String },

    #[error("Rate limit exceeded for {service}")]
    RateLimitExceeded { service: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AuraError {
    /// Whether repeating the same request could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            AuraError::HttpError(e) => {
                e.is_timeout()
                    || e.is_connect()
                    || e.status().map_or(true, |s| s.is_server_error())
            }
            AuraError::Provider { .. }
            | AuraError::RpcError { .. }
            | AuraError::RateLimitExceeded { .. } => true,
            AuraError::MissingCredentials(_)
            | AuraError::Unauthorized(_)
            | AuraError::UserNotFound(_)
            | AuraError::InvalidInput(_)
            | AuraError::SerializationError(_)
            | AuraError::ConfigError(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuraError>;
