//! Elo-style probability strategy
//!
//! The alternative adjustment model: a logistic expectation over the two
//! team averages, scaled by a K-factor derived from the perspective
//! team's experience tiers. Both sides move by the same magnitude and
//! volatility is left untouched, which makes this model easy to compare
//! against the heuristic on identical inputs.

use crate::error::{EngineError, Result};
use crate::rating::conversion::pti_to_mu;
use crate::rating::strategy::AdjustmentStrategy;
use crate::score::{match_winner, SetResult};
use crate::types::{
    AdjustmentResult, MatchInput, MatchSnapshots, PlayerSnapshot, Team,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Rating-difference scale of the logistic curve.
const ELO_SCALE: f64 = 400.0;

/// Configuration for the probability strategy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EloProbabilityConfig {
    /// Base K-factor before the tier multiplier is applied.
    pub base_k: f64,
}

impl Default for EloProbabilityConfig {
    fn default() -> Self {
        Self { base_k: 4.0 }
    }
}

impl EloProbabilityConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.base_k.is_finite() || self.base_k <= 0.0 {
            return Err(EngineError::ConfigurationError {
                message: format!("base_k must be positive and finite, got {}", self.base_k),
            }
            .into());
        }
        Ok(())
    }
}

/// Elo-style probability adjustment model.
#[derive(Debug, Clone, Copy)]
pub struct EloProbabilityStrategy {
    config: EloProbabilityConfig,
}

impl EloProbabilityStrategy {
    pub fn new(config: EloProbabilityConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Expected score for team one, in `(0, 1)`.
    ///
    /// Display ratings run lower-is-better, so the classic Elo exponent is
    /// flipped: the side with the lower average gets an expectation above
    /// one half.
    fn expected_team1(team1_avg: f64, team2_avg: f64) -> f64 {
        1.0 / (1.0 + 10f64.powf((team1_avg - team2_avg) / ELO_SCALE))
    }

    /// K-factor for the match: base K scaled by the average experience
    /// multiplier of the perspective team.
    fn match_k(&self, input: &MatchInput) -> f64 {
        let multiplier = (input.player.tier.experience_multiplier()
            + input.partner.tier.experience_multiplier())
            / 2.0;
        self.config.base_k * multiplier
    }
}

impl AdjustmentStrategy for EloProbabilityStrategy {
    fn calculate(&self, input: &MatchInput, sets: &[SetResult]) -> AdjustmentResult {
        let winner = match_winner(sets).unwrap_or(Team::One);
        let team1_avg = input.team1_average();
        let team2_avg = input.team2_average();
        let spread = (team1_avg - team2_avg).abs();

        let expected = Self::expected_team1(team1_avg, team2_avg);
        let actual = if winner == Team::One { 1.0 } else { 0.0 };
        let k = self.match_k(input);
        let adjustment = (k * (actual - expected)).abs();

        debug!(%winner, expected, k, adjustment, "running elo probability model");

        let mut before = [PlayerSnapshot::new(0.0, 0.0, 0.0); 4];
        let mut after = before;

        for (slot, entry) in input.entries().into_iter().enumerate() {
            let sigma = entry.tier.seed_volatility();
            let won = MatchInput::team_of_slot(slot) == winner;
            let new_pti = if won {
                entry.pti - adjustment
            } else {
                entry.pti + adjustment
            };

            before[slot] = PlayerSnapshot::new(entry.pti, pti_to_mu(entry.pti), sigma);
            after[slot] = PlayerSnapshot::new(new_pti, pti_to_mu(new_pti), sigma);
        }

        AdjustmentResult {
            spread,
            adjustment,
            before: MatchSnapshots::from_slots(before),
            after: MatchSnapshots::from_slots(after),
        }
    }

    fn name(&self) -> &'static str {
        "elo"
    }

    fn config(&self) -> serde_json::Value {
        serde_json::json!({
            "strategy": "elo",
            "base_k": self.config.base_k,
            "scale": ELO_SCALE,
        })
    }
}
