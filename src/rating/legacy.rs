//! Favored/underdog heuristic strategy
//!
//! This is the adjustment model carried over from the original league
//! calculator. Each player gets a K-factor from their own volatility
//! bucket, the team with the lower average display rating is the
//! favorite, and the swing is small when the result matches expectations
//! and large on an upset. Volatility ages by a fixed increment after
//! every match, win or lose.

use crate::rating::conversion::pti_to_mu;
use crate::rating::strategy::AdjustmentStrategy;
use crate::score::{match_winner, SetResult};
use crate::types::{
    AdjustmentResult, MatchInput, MatchSnapshots, PlayerSnapshot, Team,
};
use tracing::debug;

/// Swing factor applied when the result matches the seeding.
const EXPECTED_SWING: f64 = 0.4;

/// Swing factor applied on an upset.
const UPSET_SWING: f64 = 0.8;

/// Volatility added to every player after a completed match.
const SIGMA_AGING: f64 = 0.03;

/// K-factor for a player's volatility bucket.
///
/// Bucket thresholds line up with the tier volatility seeds, so a new
/// player swings harder than an established one.
fn k_factor(volatility: f64) -> f64 {
    if volatility >= 7.0 {
        6.0
    } else if volatility >= 5.0 {
        5.0
    } else if volatility >= 4.0 {
        4.78
    } else {
        4.6
    }
}

/// The heuristic favored/underdog adjustment model.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyHeuristicStrategy;

impl LegacyHeuristicStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl AdjustmentStrategy for LegacyHeuristicStrategy {
    fn calculate(&self, input: &MatchInput, sets: &[SetResult]) -> AdjustmentResult {
        let winner = match_winner(sets).unwrap_or(Team::One);
        let favored = input.favored_team();
        let spread = input.spread();

        debug!(%winner, %favored, spread, "running legacy heuristic");

        let mut before = [PlayerSnapshot::new(0.0, 0.0, 0.0); 4];
        let mut after = before;

        for (slot, entry) in input.entries().into_iter().enumerate() {
            let sigma = entry.tier.seed_volatility();
            let team = MatchInput::team_of_slot(slot);
            let won = team == winner;

            let k = k_factor(sigma);
            let magnitude = if won == (team == favored) {
                EXPECTED_SWING
            } else {
                UPSET_SWING
            };
            let pti_change = if won { -k * magnitude } else { k * magnitude };

            let new_pti = entry.pti + pti_change;
            before[slot] = PlayerSnapshot::new(entry.pti, pti_to_mu(entry.pti), sigma);
            // mu is re-derived from the new display rating, not reversed
            // from the old mu
            after[slot] = PlayerSnapshot::new(new_pti, pti_to_mu(new_pti), sigma + SIGMA_AGING);
        }

        // The perspective player's own movement is reported as the
        // representative magnitude of the match
        let adjustment = (before[0].pti - after[0].pti).abs();

        AdjustmentResult {
            spread,
            adjustment,
            before: MatchSnapshots::from_slots(before),
            after: MatchSnapshots::from_slots(after),
        }
    }

    fn name(&self) -> &'static str {
        "legacy"
    }

    fn config(&self) -> serde_json::Value {
        serde_json::json!({
            "strategy": "legacy",
            "expected_swing": EXPECTED_SWING,
            "upset_swing": UPSET_SWING,
            "sigma_aging": SIGMA_AGING,
        })
    }
}
