//! Integration tests for the rating engine
//!
//! These tests exercise the whole pipeline through the public API:
//! score parsing, tier normalization, strategy selection, fallback
//! behavior, and the JSON shape the web layer serializes.

use pti_engine::config::EngineConfig;
use pti_engine::engine::{rate_match, RatingEngine};
use pti_engine::types::{ExperienceTier, MatchInput, PlayerEntry, StrategyKind};

/// The documented comparison scenario: an unbalanced match, three sets,
/// won by the higher-rated side.
fn reference_match() -> MatchInput {
    MatchInput::new(
        PlayerEntry::from_label(50.0, "30+"),
        PlayerEntry::from_label(40.0, "30+ matches"),
        PlayerEntry::from_label(30.0, "30+"),
        PlayerEntry::from_label(23.0, "30+"),
        "6-2,2-6,6-3",
    )
}

#[test]
fn test_legacy_end_to_end() {
    let engine = RatingEngine::new(EngineConfig::default()).unwrap();
    let result = engine.rate_match(&reference_match());

    // Step 1: spread comes from the raw team averages
    assert_eq!(result.spread, 18.5);

    // Step 2: an upset win by the 30+ bucket swings both sides by 4.6 * 0.8
    assert_eq!(result.adjustment, 3.68);
    assert_eq!(result.after.player.pti, 46.32);
    assert_eq!(result.after.partner.pti, 36.32);
    assert_eq!(result.after.opp1.pti, 33.68);
    assert_eq!(result.after.opp2.pti, 26.68);

    // Step 3: volatility aged for all four players
    for (before, after) in result
        .before
        .as_slots()
        .into_iter()
        .zip(result.after.as_slots())
    {
        assert_eq!(before.sigma, 3.2);
        assert_eq!(after.sigma, 3.23);
    }
}

#[test]
fn test_elo_end_to_end() {
    let engine = RatingEngine::new(EngineConfig {
        strategy: StrategyKind::Elo,
        base_k: 4.0,
    })
    .unwrap();
    let result = engine.rate_match(&reference_match());

    assert_eq!(result.spread, 18.5);

    // k = 4.0 * 0.8, expected ~0.4734 for the higher-rated side, so both
    // sides move by |k * (1 - expected)| = 1.69 after rounding
    assert_eq!(result.adjustment, 1.69);
    assert_eq!(result.after.player.pti, 48.31);
    assert_eq!(result.after.partner.pti, 38.31);
    assert_eq!(result.after.opp1.pti, 31.69);
    assert_eq!(result.after.opp2.pti, 24.69);

    // Volatility untouched
    for (before, after) in result
        .before
        .as_slots()
        .into_iter()
        .zip(result.after.as_slots())
    {
        assert_eq!(before.sigma, after.sigma);
    }
}

#[test]
fn test_json_contract() {
    let engine = RatingEngine::new(EngineConfig::default()).unwrap();
    let result = engine.rate_match(&reference_match());

    let json = serde_json::to_value(result).unwrap();
    for side in ["before", "after"] {
        for slot in ["player", "partner", "opp1", "opp2"] {
            for field in ["pti", "mu", "sigma"] {
                assert!(
                    json[side][slot][field].is_number(),
                    "{side}.{slot}.{field} missing"
                );
            }
        }
    }
    assert!(json["spread"].is_number());
    assert!(json["adjustment"].is_number());
}

#[test]
fn test_unknown_labels_degrade_to_established_tier() {
    let with_unknown = MatchInput::new(
        PlayerEntry::from_label(50.0, "whatever"),
        PlayerEntry::from_label(40.0, ""),
        PlayerEntry::from_label(30.0, "30+"),
        PlayerEntry::from_label(23.0, "30+"),
        "6-2,2-6,6-3",
    );

    let result = rate_match(&with_unknown);
    let reference = rate_match(&reference_match());
    assert_eq!(result, reference);
}

#[test]
fn test_garbage_score_returns_neutral_result() {
    let mut input = reference_match();
    input.score = "n/a".to_string();

    let result = rate_match(&input);
    assert_eq!(result.adjustment, 0.0);
    assert_eq!(result.spread, 18.5);
    assert_eq!(result.before, result.after);
    assert_eq!(result.before.player.sigma, 3.2);
}

#[test]
fn test_partial_garbage_score_still_rates() {
    // One malformed segment dropped, the two valid sets decide the match
    let mut input = reference_match();
    input.score = "6-2,bogus,6-3".to_string();

    let result = rate_match(&input);
    assert_eq!(result.adjustment, 3.68);
}

#[test]
fn test_identical_inputs_identical_outputs() {
    let input = reference_match();

    let first = rate_match(&input);
    let second = rate_match(&input);
    assert_eq!(first, second);

    // A separately constructed engine agrees as well
    let engine = RatingEngine::new(EngineConfig::default()).unwrap();
    assert_eq!(engine.rate_match(&input), first);
}

#[test]
fn test_both_strategies_share_the_result_shape() {
    let input = reference_match();
    for kind in [StrategyKind::Legacy, StrategyKind::Elo] {
        let engine = RatingEngine::new(EngineConfig {
            strategy: kind,
            base_k: 4.0,
        })
        .unwrap();
        let result = engine.rate_match(&input);

        assert_eq!(result.spread, 18.5);
        assert!(result.adjustment > 0.0);
        assert_eq!(result.before.as_slots().len(), 4);
        assert_eq!(result.after.as_slots().len(), 4);
    }
}

#[test]
fn test_tier_aliases_normalize() {
    assert_eq!(ExperienceTier::from_label("30+ MATCHES"), ExperienceTier::High);
    assert_eq!(ExperienceTier::from_label("New Player"), ExperienceTier::New);
    assert_eq!(ExperienceTier::from_label("1-10 matches"), ExperienceTier::Low);
}
