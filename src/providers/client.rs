use async_trait::async_trait;
use std::fmt;

use crate::models::{AuraError, ProfileStats, Result};

/// How a caller names the profile to fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProfileLookup {
    Username(String),
    Fid(u64),
}

impl ProfileLookup {
    /// Accepts `@name`, `name`, or a numeric fid.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AuraError::InvalidInput("profile must not be empty".to_string()));
        }

        if let Ok(fid) = trimmed.parse::<u64>() {
            return Ok(ProfileLookup::Fid(fid));
        }

        let name = trimmed.trim_start_matches('@');
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
        if !valid {
            return Err(AuraError::InvalidInput(format!("not a valid username: {}", input)));
        }

        Ok(ProfileLookup::Username(name.to_lowercase()))
    }
}

impl fmt::Display for ProfileLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileLookup::Username(name) => write!(f, "@{}", name),
            ProfileLookup::Fid(fid) => write!(f, "fid:{}", fid),
        }
    }
}

/// Source of raw social statistics for a profile.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Short service name used in logs
    fn service(&self) -> &'static str;

    /// Fetch the profile and its recent casts
    async fn fetch_profile(&self, lookup: &ProfileLookup) -> Result<ProfileStats>;
}

/// Source of on-chain activity counts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OnchainProvider: Send + Sync {
    fn chain(&self) -> &'static str;

    /// Total transactions sent from the given addresses
    async fn transaction_count(&self, addresses: &[String]) -> Result<u64>;
}
