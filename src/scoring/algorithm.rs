use tracing::{debug, trace};

use crate::{
    models::{Archetype, AuraBreakdown, AuraInputs, AuraResult},
    scoring::{
        affinity::{compute_affinities, is_lurker, select_archetype},
        normalize::{clamp, log_scale, style_score},
        weights::{NormalizationCaps, ScoringWeights},
    },
};

/// Pure scoring pipeline: normalize, pick an archetype, weight the breakdown.
///
/// Holds configuration only, so a single engine can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct AuraEngine {
    weights: ScoringWeights,
    caps: NormalizationCaps,
}

impl AuraEngine {
    pub fn new(weights: ScoringWeights, caps: NormalizationCaps) -> Self {
        Self { weights, caps }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn caps(&self) -> &NormalizationCaps {
        &self.caps
    }

    pub fn compute(&self, inputs: &AuraInputs) -> AuraResult {
        let breakdown = self.breakdown(inputs);
        let archetype = self.classify(inputs, &breakdown);
        let score = self.final_score(&breakdown, archetype);

        debug!(
            archetype = archetype.as_str(),
            score,
            activity = breakdown.activity,
            impact = breakdown.impact,
            social = breakdown.social,
            style = breakdown.style,
            onchain = breakdown.onchain,
            "Computed aura"
        );

        AuraResult::new(archetype, score, breakdown)
    }

    pub fn breakdown(&self, inputs: &AuraInputs) -> AuraBreakdown {
        let weighted_activity = inputs.casts() as f64 + inputs.replies() as f64 * 1.2;

        AuraBreakdown {
            activity: log_scale(weighted_activity, self.caps.activity),
            impact: log_scale(inputs.reactions_received() as f64, self.caps.impact),
            social: log_scale(inputs.followers() as f64, self.caps.social),
            style: style_score(inputs.long_cast_ratio(), inputs.media_cast_ratio()),
            onchain: log_scale(inputs.base_tx_count() as f64, self.caps.onchain),
        }
    }

    pub fn classify(&self, inputs: &AuraInputs, breakdown: &AuraBreakdown) -> Archetype {
        let casts = inputs.casts();
        let replies = inputs.replies();

        if is_lurker(casts, replies, breakdown) {
            trace!(casts, replies, "Lurker override");
            return Archetype::Lurker;
        }

        let affinities = compute_affinities(breakdown, replies > casts, inputs.long_cast_ratio());
        trace!(?affinities, "Archetype affinities");
        select_archetype(&affinities)
    }

    /// Lurkers are squeezed into `[10, 60]`; everyone else spans `[0, 100]`.
    pub fn final_score(&self, breakdown: &AuraBreakdown, archetype: Archetype) -> u8 {
        let w = &self.weights;
        let weighted = breakdown.activity as f64 * w.activity
            + breakdown.impact as f64 * w.impact
            + breakdown.social as f64 * w.social
            + breakdown.style as f64 * w.style
            + breakdown.onchain as f64 * w.onchain;

        let score = match archetype {
            Archetype::Lurker => clamp(weighted * 0.7 + 10.0, 0.0, 60.0),
            _ => clamp(weighted, 0.0, 100.0),
        };
        score.round() as u8
    }
}

/// Score with the stock weights and caps.
pub fn compute_aura(inputs: &AuraInputs) -> AuraResult {
    AuraEngine::default().compute(inputs)
}
