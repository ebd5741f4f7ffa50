use aura_scorer::{
    compute_aura,
    models::{Archetype, AuraBreakdown, AuraInputs},
    scoring::{AuraEngine, NormalizationCaps, ScoringWeights},
    Settings,
};

fn assert_bounded(inputs: &AuraInputs) {
    let result = compute_aura(inputs);
    assert!(result.score <= 100, "score {} for {:?}", result.score, inputs);
    for (name, value) in result.breakdown.dimensions() {
        assert!(value <= 100, "{} = {} for {:?}", name, value, inputs);
    }
    if result.archetype == Archetype::Lurker {
        assert!((10..=60).contains(&result.score), "lurker score {}", result.score);
    }
}

#[test]
fn test_scores_stay_in_range() {
    let counts = [-50, 0, 1, 2, 3, 12, 100, 5_000, i64::MAX];
    let ratios = [None, Some(-1.0), Some(0.0), Some(0.36), Some(1.0), Some(9.0), Some(f64::NAN)];

    for &casts in &counts {
        for &replies in &counts {
            for &other in &counts {
                for &ratio in &ratios {
                    let inputs = AuraInputs {
                        casts,
                        replies,
                        reactions_received: other,
                        followers: other,
                        long_cast_ratio: ratio,
                        media_cast_ratio: ratio,
                        base_tx_count: Some(other),
                    };
                    assert_bounded(&inputs);
                }
            }
        }
    }
}

#[test]
fn test_empty_profile() {
    let result = compute_aura(&AuraInputs::new(0, 0, 0, 0));

    assert_eq!(result.archetype, Archetype::Lurker);
    assert_eq!(result.breakdown, AuraBreakdown::default());
    assert!((10..=60).contains(&result.score));
    assert_eq!(result.emoji, "👀");
    assert_eq!(result.description, "Silent watcher. Your aura is mysterious (and powerful).");
}

#[test]
fn test_footprint_rule_beats_everything() {
    let inputs = AuraInputs::new(1, 0, 1000, 1_000_000)
        .with_base_tx_count(10_000)
        .with_long_cast_ratio(1.0)
        .with_media_cast_ratio(1.0);
    let result = compute_aura(&inputs);

    assert_eq!(result.archetype, Archetype::Lurker);
    assert_eq!(result.breakdown.impact, 100);
    assert_eq!(result.breakdown.social, 100);
    assert!(result.score <= 60);
}

#[test]
fn test_active_profile_is_not_lurker() {
    let inputs = AuraInputs::new(200, 50, 500, 5000).with_base_tx_count(0);
    let result = compute_aura(&inputs);

    assert_eq!(result.breakdown.activity, 100);
    assert_eq!(result.breakdown.impact, 100);
    assert!(result.breakdown.social >= 99);
    assert!(matches!(result.archetype, Archetype::Builder | Archetype::Influencer));
    assert!(result.score > 60);
}

#[test]
fn test_onchain_profile_is_degen() {
    let inputs = AuraInputs::new(10, 2, 5, 20).with_base_tx_count(60);
    let result = compute_aura(&inputs);

    assert_eq!(result.breakdown.onchain, 100);
    assert_eq!(result.archetype, Archetype::Degen);
    assert_eq!(result.label, "Degen Aura");
}

#[test]
fn test_longform_profile_is_thinker() {
    let inputs = AuraInputs::new(15, 10, 8, 30)
        .with_long_cast_ratio(0.8)
        .with_media_cast_ratio(0.1);
    let result = compute_aura(&inputs);

    assert_eq!(result.breakdown.style, 49);
    assert_eq!(result.archetype, Archetype::Thinker);
}

#[test]
fn test_media_profile_is_creator() {
    let inputs = AuraInputs::new(30, 5, 20, 40)
        .with_long_cast_ratio(0.2)
        .with_media_cast_ratio(1.0);
    let result = compute_aura(&inputs);

    assert_eq!(result.breakdown.style, 56);
    assert_eq!(result.archetype, Archetype::Creator);
}

#[test]
fn test_monotonic_in_each_count() {
    let base = AuraInputs::new(5, 5, 5, 5).with_base_tx_count(5);
    let bumps: [fn(&mut AuraInputs, i64); 5] = [
        |i, v| i.casts = v,
        |i, v| i.replies = v,
        |i, v| i.reactions_received = v,
        |i, v| i.followers = v,
        |i, v| i.base_tx_count = Some(v),
    ];
    let read: [fn(&AuraBreakdown) -> u8; 5] = [
        |b| b.activity,
        |b| b.activity,
        |b| b.impact,
        |b| b.social,
        |b| b.onchain,
    ];

    let engine = AuraEngine::default();
    for (bump, read) in bumps.iter().zip(read.iter()) {
        let mut previous = 0;
        for value in (0..3000).step_by(7) {
            let mut inputs = base;
            bump(&mut inputs, value);
            let current = read(&engine.breakdown(&inputs));
            assert!(current >= previous);
            previous = current;
        }
    }
}

#[test]
fn test_saturation_far_above_cap() {
    let result = compute_aura(&AuraInputs::new(100_000, 100_000, 10_000_000, 50_000_000).with_base_tx_count(1_000_000));
    let b = result.breakdown;
    assert_eq!((b.activity, b.impact, b.social, b.onchain), (100, 100, 100, 100));
}

#[test]
fn test_deterministic() {
    let inputs = AuraInputs::new(42, 17, 300, 1200)
        .with_long_cast_ratio(0.4)
        .with_media_cast_ratio(0.25)
        .with_base_tx_count(9);
    let first = compute_aura(&inputs);
    for _ in 0..10 {
        assert_eq!(compute_aura(&inputs), first);
    }
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(AuraEngine::default());
    let handles: Vec<_> = (0..4)
        .map(|n| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.compute(&AuraInputs::new(10 * n, n, 50, 500)))
        })
        .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        let n = n as i64;
        assert_eq!(handle.join().unwrap(), compute_aura(&AuraInputs::new(10 * n, n, 50, 500)));
    }
}

#[test]
fn test_engine_from_settings_matches_default() {
    let settings = Settings::default();
    let engine = AuraEngine::new(settings.scoring.weights.clone(), settings.scoring.caps.clone());
    let inputs = AuraInputs::new(12, 30, 80, 400);

    assert_eq!(engine.compute(&inputs), compute_aura(&inputs));
    assert_eq!(engine.weights(), &ScoringWeights::default());
    assert_eq!(engine.caps(), &NormalizationCaps::default());
}

#[test]
fn test_result_json_shape() {
    let result = compute_aura(&AuraInputs::new(10, 2, 5, 20).with_base_tx_count(60));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["type"], "DEGEN");
    assert_eq!(json["emoji"], "🎰");
    assert_eq!(json["breakdown"]["onchain"], 100);
    assert!(json["score"].as_u64().unwrap() <= 100);
}
