use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::AuraInputs;

/// Casts longer than this many characters count as long-form.
pub const LONG_CAST_CHARS: usize = 320;

/// One cast from the observation window, reduced to what scoring needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CastSummary {
    pub is_reply: bool,
    pub text_len: usize,
    pub has_media: bool,
    pub likes: u64,
    pub recasts: u64,
}

/// Raw profile statistics returned by a stats provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileStats {
    pub fid: u64,
    pub username: String,
    pub display_name: Option<String>,
    pub followers: u64,
    pub verified_addresses: Vec<String>,
    pub casts: Vec<CastSummary>,
    pub base_tx_count: Option<u64>,
    pub fetched_at: DateTime<Utc>,
}

impl ProfileStats {
    pub fn new(fid: u64, username: impl Into<String>) -> Self {
        Self {
            fid,
            username: username.into(),
            display_name: None,
            followers: 0,
            verified_addresses: Vec::new(),
            casts: Vec::new(),
            base_tx_count: None,
            fetched_at: Utc::now(),
        }
    }

    pub fn reply_count(&self) -> u64 {
        self.casts.iter().filter(|c| c.is_reply).count() as u64
    }

    pub fn top_level_count(&self) -> u64 {
        self.casts.len() as u64 - self.reply_count()
    }

    pub fn reactions_received(&self) -> u64 {
        self.casts
            .iter()
            .map(|c| c.likes.saturating_add(c.recasts))
            .fold(0u64, u64::saturating_add)
    }

    fn ratio_of(&self, pred: impl Fn(&CastSummary) -> bool) -> Option<f64> {
        if self.casts.is_empty() {
            return None;
        }
        let hits = self.casts.iter().filter(|c| pred(c)).count();
        Some(hits as f64 / self.casts.len() as f64)
    }

    pub fn long_cast_ratio(&self) -> Option<f64> {
        self.ratio_of(|c| c.text_len > LONG_CAST_CHARS)
    }

    pub fn media_cast_ratio(&self) -> Option<f64> {
        self.ratio_of(|c| c.has_media)
    }

    /// Reduce the fetched window to engine inputs.
    pub fn to_inputs(&self) -> AuraInputs {
        AuraInputs {
            casts: saturating_i64(self.top_level_count()),
            replies: saturating_i64(self.reply_count()),
            reactions_received: saturating_i64(self.reactions_received()),
            followers: saturating_i64(self.followers),
            long_cast_ratio: self.long_cast_ratio(),
            media_cast_ratio: self.media_cast_ratio(),
            base_tx_count: self.base_tx_count.map(saturating_i64),
        }
    }
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
