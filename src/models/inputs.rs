use serde::{Deserialize, Serialize};

/// Raw social-activity metrics for a single profile.
///
/// Counts are signed so that whatever a caller hands over can be represented;
/// negatives are floored to zero when the engine normalizes them. Ratios are
/// clamped into `[0, 1]` at the same point, and absent optionals count as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuraInputs {
    pub casts: i64,
    pub replies: i64,
    pub reactions_received: i64,
    pub followers: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_cast_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_cast_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_tx_count: Option<i64>,
}

impl AuraInputs {
    pub fn new(casts: i64, replies: i64, reactions_received: i64, followers: i64) -> Self {
        Self {
            casts,
            replies,
            reactions_received,
            followers,
            ..Default::default()
        }
    }

    pub fn with_long_cast_ratio(mut self, ratio: f64) -> Self {
        self.long_cast_ratio = Some(ratio);
        self
    }

    pub fn with_media_cast_ratio(mut self, ratio: f64) -> Self {
        self.media_cast_ratio = Some(ratio);
        self
    }

    pub fn with_base_tx_count(mut self, count: i64) -> Self {
        self.base_tx_count = Some(count);
        self
    }

    /// Casts with negatives floored.
    pub fn casts(&self) -> u64 {
        floor_count(self.casts)
    }

    pub fn replies(&self) -> u64 {
        floor_count(self.replies)
    }

    pub fn reactions_received(&self) -> u64 {
        floor_count(self.reactions_received)
    }

    pub fn followers(&self) -> u64 {
        floor_count(self.followers)
    }

    pub fn base_tx_count(&self) -> u64 {
        self.base_tx_count.map(floor_count).unwrap_or(0)
    }

    /// Long-form ratio in `[0, 1]`; absent or NaN reads as 0.
    pub fn long_cast_ratio(&self) -> f64 {
        unit_ratio(self.long_cast_ratio)
    }

    pub fn media_cast_ratio(&self) -> f64 {
        unit_ratio(self.media_cast_ratio)
    }
}

fn floor_count(value: i64) -> u64 {
    value.max(0) as u64
}

fn unit_ratio(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_nan() => 0.0,
        Some(v) => v.clamp(0.0, 1.0),
        None => 0.0,
    }
}
