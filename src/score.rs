//! Set-score parsing
//!
//! Scores arrive as comma-separated `"games-games"` segments, e.g.
//! `"6-2,2-6,6-3"`. Parsing is deliberately lenient: a segment that does
//! not split into exactly two integers is dropped and the rest of the
//! string is still processed. Callers never see a parse error; an
//! unusable score simply yields no sets and the engine falls back to a
//! neutral result.

use crate::types::Team;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of a single set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetResult {
    /// The side that took the set.
    pub winner: Team,
    /// The winning side's share of total games in the set, in `[0, 1]`.
    pub game_fraction: f64,
}

impl SetResult {
    pub fn new(winner: Team, game_fraction: f64) -> Self {
        Self {
            winner,
            game_fraction,
        }
    }
}

/// Parse a delimited score string into per-set outcomes.
///
/// Segment order is preserved. Malformed segments are skipped silently;
/// an all-invalid or empty input yields an empty vec.
pub fn parse_scores(score: &str) -> Vec<SetResult> {
    score
        .split(',')
        .filter_map(|segment| match parse_segment(segment) {
            Some(set) => Some(set),
            None => {
                if !segment.trim().is_empty() {
                    debug!(segment, "skipping malformed set segment");
                }
                None
            }
        })
        .collect()
}

/// Parse one `"a-b"` segment, or `None` if it is malformed.
fn parse_segment(segment: &str) -> Option<SetResult> {
    let mut tokens = segment.trim().split('-');
    let first = tokens.next()?.trim().parse::<i64>().ok()?;
    let second = tokens.next()?.trim().parse::<i64>().ok()?;
    if tokens.next().is_some() {
        return None;
    }

    let winner = if first > second { Team::One } else { Team::Two };
    let total = first + second;
    // "0-0" guard: an empty set counts as a coin flip
    let game_fraction = if total > 0 {
        first.max(second) as f64 / total as f64
    } else {
        0.5
    };

    Some(SetResult::new(winner, game_fraction))
}

/// The team that won a strict majority of the valid sets.
///
/// Returns `None` when no side has a majority (no sets, or an even split),
/// in which case the engine degrades to its neutral fallback result.
pub fn match_winner(sets: &[SetResult]) -> Option<Team> {
    let team1_sets = sets.iter().filter(|s| s.winner == Team::One).count();
    let team2_sets = sets.len() - team1_sets;

    if team1_sets > team2_sets {
        Some(Team::One)
    } else if team2_sets > team1_sets {
        Some(Team::Two)
    } else {
        None
    }
}
