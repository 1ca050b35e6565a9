//! Rating engine orchestrator
//!
//! Ties the pieces together: parse the score string, pick the configured
//! strategy, round the result at the boundary. When the score yields no
//! usable sets (nothing parsed, or no side with a set majority) the
//! engine returns a neutral result instead of an error; callers always
//! receive a well-formed response.

use crate::config::EngineConfig;
use crate::error::Result;
use crate::rating::conversion::pti_to_mu;
use crate::rating::elo::{EloProbabilityConfig, EloProbabilityStrategy};
use crate::rating::legacy::LegacyHeuristicStrategy;
use crate::rating::strategy::AdjustmentStrategy;
use crate::score::{match_winner, parse_scores};
use crate::types::{
    AdjustmentResult, MatchInput, MatchSnapshots, PlayerSnapshot, StrategyKind,
};
use tracing::debug;

/// The rating adjustment engine.
///
/// Holds only configuration and the selected strategy; every call builds
/// its own working state, so one engine can serve any number of
/// concurrent callers.
pub struct RatingEngine {
    config: EngineConfig,
    strategy: Box<dyn AdjustmentStrategy>,
}

impl RatingEngine {
    /// Build an engine from a validated configuration.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let strategy: Box<dyn AdjustmentStrategy> = match config.strategy {
            StrategyKind::Legacy => Box::new(LegacyHeuristicStrategy::new()),
            StrategyKind::Elo => Box::new(EloProbabilityStrategy::new(EloProbabilityConfig {
                base_k: config.base_k,
            })?),
        };

        Ok(Self { config, strategy })
    }

    /// The strategy the engine was configured with.
    pub fn strategy_kind(&self) -> StrategyKind {
        self.config.strategy
    }

    /// Name of the active strategy.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Active strategy configuration as JSON, for diagnostics.
    pub fn strategy_config(&self) -> serde_json::Value {
        self.strategy.config()
    }

    /// Rate a completed match.
    ///
    /// Never fails: an unusable score string degrades to the neutral
    /// fallback result. All numeric fields of the returned value are
    /// rounded to two decimal places.
    pub fn rate_match(&self, input: &MatchInput) -> AdjustmentResult {
        let sets = parse_scores(&input.score);

        if match_winner(&sets).is_none() {
            debug!(
                score = %input.score,
                valid_sets = sets.len(),
                "no usable set majority, returning neutral result"
            );
            return fallback_result(input).rounded();
        }

        self.strategy.calculate(input, &sets).rounded()
    }
}

impl std::fmt::Debug for RatingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RatingEngine")
            .field("config", &self.config)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

/// Rate a match with the default configuration.
///
/// Convenience wrapper for callers that do not hold an engine; constructs
/// a fresh default engine per call and retains nothing.
pub fn rate_match(input: &MatchInput) -> AdjustmentResult {
    let strategy = LegacyHeuristicStrategy::new();
    let sets = parse_scores(&input.score);

    if match_winner(&sets).is_none() {
        return fallback_result(input).rounded();
    }

    strategy.calculate(input, &sets).rounded()
}

/// The neutral zero-adjustment result: spread still computed from the raw
/// inputs, before and after identical, inputs converted exactly once.
fn fallback_result(input: &MatchInput) -> AdjustmentResult {
    let mut slots = [PlayerSnapshot::new(0.0, 0.0, 0.0); 4];
    for (slot, entry) in input.entries().into_iter().enumerate() {
        slots[slot] = PlayerSnapshot::new(
            entry.pti,
            pti_to_mu(entry.pti),
            entry.tier.seed_volatility(),
        );
    }

    let snapshots = MatchSnapshots::from_slots(slots);
    AdjustmentResult {
        spread: input.spread(),
        adjustment: 0.0,
        before: snapshots,
        after: snapshots,
    }
}
