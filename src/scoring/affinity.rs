use crate::models::{Archetype, AuraBreakdown};

/// Unclamped per-archetype suitability, only ever compared against itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affinities {
    pub builder: f64,
    pub creator: f64,
    pub influencer: f64,
    pub thinker: f64,
    pub degen: f64,
}

impl Affinities {
    /// Candidates in tie-break order.
    pub fn ranked(&self) -> [(Archetype, f64); 5] {
        [
            (Archetype::Builder, self.builder),
            (Archetype::Creator, self.creator),
            (Archetype::Influencer, self.influencer),
            (Archetype::Thinker, self.thinker),
            (Archetype::Degen, self.degen),
        ]
    }
}

/// Near-zero footprint, or low on all three primary dimensions.
pub fn is_lurker(casts: u64, replies: u64, breakdown: &AuraBreakdown) -> bool {
    casts.saturating_add(replies) <= 2
        || (breakdown.activity <= 12 && breakdown.impact <= 12 && breakdown.social <= 12)
}

pub fn compute_affinities(
    breakdown: &AuraBreakdown,
    replies_exceed_casts: bool,
    long_cast_ratio: f64,
) -> Affinities {
    let activity = breakdown.activity as f64;
    let impact = breakdown.impact as f64;
    let social = breakdown.social as f64;
    let style = breakdown.style as f64;
    let onchain = breakdown.onchain as f64;

    let reply_bonus = if replies_exceed_casts { 10.0 } else { 0.0 };
    let longform_bonus = if long_cast_ratio > 0.35 { 10.0 } else { 0.0 };

    Affinities {
        builder: activity * 0.60 + impact * 0.20 + reply_bonus,
        creator: style * 0.75 + impact * 0.15 + activity * 0.10,
        influencer: social * 0.45 + impact * 0.45 + activity * 0.10,
        thinker: style * 0.55 + activity * 0.35 + longform_bonus,
        degen: onchain * 0.65 + activity * 0.20 + impact * 0.15,
    }
}

/// Highest affinity wins; equal values go to the earlier candidate.
pub fn select_archetype(affinities: &Affinities) -> Archetype {
    let ranked = affinities.ranked();
    ranked[1..]
        .iter()
        .fold(ranked[0], |best, &candidate| {
            if candidate.1 > best.1 {
                candidate
            } else {
                best
            }
        })
        .0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(activity: u8, impact: u8, social: u8, style: u8, onchain: u8) -> AuraBreakdown {
        AuraBreakdown { activity, impact, social, style, onchain }
    }

    #[test]
    fn test_footprint_rule() {
        let strong = breakdown(100, 100, 100, 100, 100);
        assert!(is_lurker(1, 0, &strong));
        assert!(is_lurker(1, 1, &strong));
        assert!(!is_lurker(2, 1, &strong));
    }

    #[test]
    fn test_low_dimension_rule() {
        assert!(is_lurker(50, 50, &breakdown(12, 12, 12, 90, 90)));
        assert!(!is_lurker(50, 50, &breakdown(13, 12, 12, 0, 0)));
    }

    #[test]
    fn test_bonuses_apply() {
        let b = breakdown(50, 50, 50, 50, 50);
        let plain = compute_affinities(&b, false, 0.35);
        let boosted = compute_affinities(&b, true, 0.36);
        assert!((boosted.builder - plain.builder - 10.0).abs() < 1e-9);
        assert!((boosted.thinker - plain.thinker - 10.0).abs() < 1e-9);
        assert_eq!(boosted.creator, plain.creator);
    }

    #[test]
    fn test_ties_go_to_declaration_order() {
        let tied = Affinities {
            builder: 10.0,
            creator: 10.0,
            influencer: 10.0,
            thinker: 10.0,
            degen: 10.0,
        };
        assert_eq!(select_archetype(&tied), Archetype::Builder);

        let tied_late = Affinities { builder: 1.0, creator: 2.0, influencer: 7.5, thinker: 3.0, degen: 7.5 };
        assert_eq!(select_archetype(&tied_late), Archetype::Influencer);
    }

    #[test]
    fn test_builder_beats_creator_on_exact_tie() {
        // builder = 60*0.6 + 60*0.2 = 48, creator = 44*0.75 + 60*0.15 + 60*0.1 = 48
        let b = breakdown(60, 60, 0, 44, 0);
        let affinities = compute_affinities(&b, false, 0.0);
        assert_eq!(affinities.builder, affinities.creator);
        assert!(affinities.thinker < affinities.builder);
        assert!(affinities.influencer < affinities.builder);
        assert_eq!(select_archetype(&affinities), Archetype::Builder);
    }

    #[test]
    fn test_strict_maximum_wins() {
        let affinities = Affinities { builder: 1.0, creator: 2.0, influencer: 3.0, thinker: 4.0, degen: 80.6 };
        assert_eq!(select_archetype(&affinities), Archetype::Degen);
    }
}
