use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, File};
use std::path::Path;

use crate::providers::RetryConfig;
use crate::scoring::weights::{NormalizationCaps, ScoringWeights};

pub const MAX_CAST_LIMIT: u32 = 150;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub scoring: ScoringSettings,
    pub neynar: NeynarSettings,
    pub base: BaseSettings,
    pub retry: RetryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringSettings {
    pub weights: ScoringWeights,
    pub caps: NormalizationCaps,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeynarSettings {
    pub api_url: String,
    pub api_key: Option<String>,
    /// Casts pulled per profile; the observation window
    pub cast_limit: u32,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseSettings {
    pub enabled: bool,
    pub rpc_url: String,
    pub timeout_seconds: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "Aura Scorer".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for NeynarSettings {
    fn default() -> Self {
        Self {
            api_url: "https://api.neynar.com".to_string(),
            api_key: None,
            cast_limit: 100,
            timeout_seconds: 15,
        }
    }
}

impl Default for BaseSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            rpc_url: "https://mainnet.base.org".to_string(),
            timeout_seconds: 15,
        }
    }
}

impl Settings {
    /// Defaults, then `config/default` and `config/local`, then `AURA_SCORE_*`
    /// environment variables (`__` between nested keys).
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("AURA_SCORE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;
        settings.apply_key_fallback(std::env::var("NEYNAR_API_KEY").ok());
        Ok(settings)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .build()?;

        s.try_deserialize()
    }

    /// Use `key` only when no API key was configured.
    pub fn apply_key_fallback(&mut self, key: Option<String>) {
        let configured = self
            .neynar
            .api_key
            .as_deref()
            .map_or(false, |k| !k.trim().is_empty());
        if !configured {
            self.neynar.api_key = key.filter(|k| !k.trim().is_empty());
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.scoring.weights.validate()?;
        self.scoring.caps.validate()?;

        if self.neynar.cast_limit == 0 || self.neynar.cast_limit > MAX_CAST_LIMIT {
            return Err(format!(
                "neynar.cast_limit must be between 1 and {}, got {}",
                MAX_CAST_LIMIT, self.neynar.cast_limit
            ));
        }

        if self.retry.max_attempts == 0 {
            return Err("retry.max_attempts must be at least 1".to_string());
        }

        Ok(())
    }
}
