pub mod settings;

pub use settings::*;
pub use crate::scoring::weights::{NormalizationCaps, ScoringWeights};
