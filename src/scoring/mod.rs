pub mod affinity;
pub mod algorithm;
pub mod analyzer;
pub mod normalize;
pub mod weights;

pub use affinity::{select_archetype, Affinities};
pub use algorithm::{compute_aura, AuraEngine};
pub use analyzer::{ProfileAnalyzer, ProfileAura};
pub use weights::{NormalizationCaps, ScoringWeights};
