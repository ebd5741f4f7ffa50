use serde::{Deserialize, Serialize};

/// Weights used to fold the breakdown into the published score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub activity: f64,
    pub impact: f64,
    pub social: f64,
    pub style: f64,
    pub onchain: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            activity: 0.35,
            impact: 0.30,
            social: 0.20,
            style: 0.10,
            onchain: 0.05,
        }
    }
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.activity + self.impact + self.social + self.style + self.onchain
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.activity < 0.0
            || self.impact < 0.0
            || self.social < 0.0
            || self.style < 0.0
            || self.onchain < 0.0
        {
            return Err("All weights must be non-negative".to_string());
        }

        let total = self.total();
        if (total - 1.0).abs() > 0.001 {
            return Err(format!("Weights must sum to 1.0, got {}", total));
        }

        Ok(())
    }
}

/// Raw values at which each log-scaled dimension reaches 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizationCaps {
    pub activity: f64,
    pub impact: f64,
    pub social: f64,
    pub onchain: f64,
}

impl Default for NormalizationCaps {
    fn default() -> Self {
        Self {
            activity: 120.0,
            impact: 250.0,
            social: 2000.0,
            onchain: 40.0,
        }
    }
}

impl NormalizationCaps {
    pub fn validate(&self) -> Result<(), String> {
        for (name, cap) in [
            ("activity", self.activity),
            ("impact", self.impact),
            ("social", self.social),
            ("onchain", self.onchain),
        ] {
            if !(cap >= 1.0) {
                return Err(format!("Cap for {} must be at least 1, got {}", name, cap));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ScoringWeights::default().validate().is_ok());
        assert!(NormalizationCaps::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_weights() {
        let mut weights = ScoringWeights::default();
        weights.style = 0.5;
        assert!(weights.validate().unwrap_err().contains("sum to 1.0"));

        weights = ScoringWeights { onchain: -0.05, activity: 0.45, ..Default::default() };
        assert!(weights.validate().unwrap_err().contains("non-negative"));
    }

    #[test]
    fn test_rejects_sub_unit_cap() {
        let caps = NormalizationCaps { social: 0.5, ..Default::default() };
        assert!(caps.validate().is_err());
        let caps = NormalizationCaps { impact: f64::NAN, ..Default::default() };
        assert!(caps.validate().is_err());
    }
}
