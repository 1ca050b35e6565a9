//! Adjustment strategy trait
//!
//! Two competing models compute rating adjustments from the same inputs:
//! the favored/underdog heuristic carried over from the original
//! calculator, and an Elo-style probability model. Neither has been
//! declared authoritative against the reference site, so both live behind
//! this trait and the engine selects one by configuration.

use crate::score::SetResult;
use crate::types::{AdjustmentResult, MatchInput};

/// A rating adjustment model.
///
/// Implementations are pure: they hold only configuration, never
/// per-match state, and the same inputs always produce the same result.
/// The calculation path does not fail; unusable inputs are handled by the
/// engine before a strategy ever runs.
pub trait AdjustmentStrategy: Send + Sync {
    /// Compute before/after snapshots for all four players.
    ///
    /// `sets` is the parsed score; the engine guarantees it contains a
    /// strict-majority winner before delegating here.
    fn calculate(&self, input: &MatchInput, sets: &[SetResult]) -> AdjustmentResult;

    /// Short name used in logs and CLI output.
    fn name(&self) -> &'static str;

    /// Current configuration as JSON, for diagnostics.
    fn config(&self) -> serde_json::Value;
}
