//! Common types used throughout the rating engine

use crate::utils::{round2, team_average};
use serde::{Deserialize, Serialize};

/// One of the two sides of a doubles match.
///
/// Slots 0-1 of a match form team one (the perspective team), slots 2-3
/// form team two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    One,
    Two,
}

impl Team {
    /// Zero-based index of the team, matching the slot layout.
    pub fn index(self) -> usize {
        match self {
            Team::One => 0,
            Team::Two => 1,
        }
    }

    /// The opposing side.
    pub fn opponent(self) -> Team {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::One => write!(f, "team 1"),
            Team::Two => write!(f, "team 2"),
        }
    }
}

/// Coarse bucket describing how many league matches a player has played.
///
/// The tier seeds a player's volatility and selects the K-factor scale used
/// by the adjustment strategies. Unrecognized labels normalize to the
/// established-player bucket rather than failing the calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceTier {
    /// No completed matches yet.
    New,
    /// 1-10 matches.
    Low,
    /// 10-30 matches.
    Mid,
    /// 30+ matches; the default for unknown labels.
    High,
}

impl ExperienceTier {
    /// Normalize a raw experience label to a tier.
    ///
    /// Matching is case-insensitive and tolerates suffixes like
    /// `"30+ matches"`. Unknown labels fall back to [`ExperienceTier::High`].
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        if normalized.starts_with("new") {
            ExperienceTier::New
        } else if normalized.starts_with("1-10") {
            ExperienceTier::Low
        } else if normalized.starts_with("10-30") {
            ExperienceTier::Mid
        } else if normalized.starts_with("30+") {
            ExperienceTier::High
        } else {
            tracing::debug!(label, "unrecognized experience label, defaulting to 30+");
            ExperienceTier::High
        }
    }

    /// Canonical label for the tier.
    pub fn label(self) -> &'static str {
        match self {
            ExperienceTier::New => "New",
            ExperienceTier::Low => "1-10",
            ExperienceTier::Mid => "10-30",
            ExperienceTier::High => "30+",
        }
    }

    /// Default volatility for a player in this tier.
    ///
    /// Less established players carry a higher volatility, which the
    /// heuristic strategy maps to a larger K-factor.
    pub fn seed_volatility(self) -> f64 {
        match self {
            ExperienceTier::New => 7.0,
            ExperienceTier::Low => 5.0,
            ExperienceTier::Mid => 4.0,
            ExperienceTier::High => 3.2,
        }
    }

    /// K-factor multiplier for the probability strategy.
    pub fn experience_multiplier(self) -> f64 {
        match self {
            ExperienceTier::New => 1.5,
            ExperienceTier::Low => 1.25,
            ExperienceTier::Mid => 1.0,
            ExperienceTier::High => 0.8,
        }
    }
}

impl std::fmt::Display for ExperienceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One player's inputs to a match: current display rating and tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerEntry {
    /// Display rating. Lower is better, by the league's convention.
    pub pti: f64,
    pub tier: ExperienceTier,
}

impl PlayerEntry {
    pub fn new(pti: f64, tier: ExperienceTier) -> Self {
        Self { pti, tier }
    }

    /// Build an entry from a raw rating and an unparsed experience label.
    pub fn from_label(pti: f64, label: &str) -> Self {
        Self::new(pti, ExperienceTier::from_label(label))
    }
}

/// A completed doubles match, in fixed slot order.
///
/// `player` and `partner` form team one; `opp1` and `opp2` form team two.
/// The score string is the raw comma-separated set list, e.g.
/// `"6-2,2-6,6-3"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchInput {
    pub player: PlayerEntry,
    pub partner: PlayerEntry,
    pub opp1: PlayerEntry,
    pub opp2: PlayerEntry,
    pub score: String,
}

impl MatchInput {
    pub fn new(
        player: PlayerEntry,
        partner: PlayerEntry,
        opp1: PlayerEntry,
        opp2: PlayerEntry,
        score: impl Into<String>,
    ) -> Self {
        Self {
            player,
            partner,
            opp1,
            opp2,
            score: score.into(),
        }
    }

    /// The four entries in slot order: player, partner, opp1, opp2.
    pub fn entries(&self) -> [PlayerEntry; 4] {
        [self.player, self.partner, self.opp1, self.opp2]
    }

    /// Which team a slot belongs to.
    pub fn team_of_slot(slot: usize) -> Team {
        if slot < 2 {
            Team::One
        } else {
            Team::Two
        }
    }

    /// Average display rating of team one.
    pub fn team1_average(&self) -> f64 {
        team_average(self.player.pti, self.partner.pti)
    }

    /// Average display rating of team two.
    pub fn team2_average(&self) -> f64 {
        team_average(self.opp1.pti, self.opp2.pti)
    }

    /// Absolute difference between the two team averages.
    pub fn spread(&self) -> f64 {
        (self.team1_average() - self.team2_average()).abs()
    }

    /// The side whose average rating marks it as the favorite.
    ///
    /// Lower is better, so the lower average is favored. An exactly even
    /// match counts team one as favored.
    pub fn favored_team(&self) -> Team {
        if self.team1_average() <= self.team2_average() {
            Team::One
        } else {
            Team::Two
        }
    }
}

/// A player's full rating state at one point in time.
///
/// `pti` is the display rating; `mu` and `sigma` are the internal
/// performance and volatility values the strategies operate on. `pti` is
/// always derived from `mu` through the conversion layer, never stored
/// independently of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub pti: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl PlayerSnapshot {
    pub fn new(pti: f64, mu: f64, sigma: f64) -> Self {
        Self { pti, mu, sigma }
    }

    /// Copy with every field rounded to two decimal places.
    pub fn rounded(self) -> Self {
        Self {
            pti: round2(self.pti),
            mu: round2(self.mu),
            sigma: round2(self.sigma),
        }
    }
}

/// Snapshots for all four match slots, keyed the same way as [`MatchInput`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshots {
    pub player: PlayerSnapshot,
    pub partner: PlayerSnapshot,
    pub opp1: PlayerSnapshot,
    pub opp2: PlayerSnapshot,
}

impl MatchSnapshots {
    pub fn from_slots(slots: [PlayerSnapshot; 4]) -> Self {
        Self {
            player: slots[0],
            partner: slots[1],
            opp1: slots[2],
            opp2: slots[3],
        }
    }

    /// The four snapshots in slot order: player, partner, opp1, opp2.
    pub fn as_slots(&self) -> [PlayerSnapshot; 4] {
        [self.player, self.partner, self.opp1, self.opp2]
    }

    /// Copy with every snapshot rounded to two decimal places.
    pub fn rounded(self) -> Self {
        Self {
            player: self.player.rounded(),
            partner: self.partner.rounded(),
            opp1: self.opp1.rounded(),
            opp2: self.opp2.rounded(),
        }
    }
}

/// Outcome of a rating adjustment calculation.
///
/// `spread` is the absolute difference between the two teams' average
/// display ratings. `adjustment` is the representative magnitude of the
/// match, taken from the perspective player's own movement. Every numeric
/// field is rounded to two decimal places before the result leaves the
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentResult {
    pub spread: f64,
    pub adjustment: f64,
    pub before: MatchSnapshots,
    pub after: MatchSnapshots,
}

impl AdjustmentResult {
    /// Copy with every numeric field rounded to two decimal places.
    pub fn rounded(self) -> Self {
        Self {
            spread: round2(self.spread),
            adjustment: round2(self.adjustment),
            before: self.before.rounded(),
            after: self.after.rounded(),
        }
    }
}

/// Which adjustment strategy the engine should run.
///
/// Neither model has been declared authoritative against the reference
/// calculator, so both stay selectable and callers choose per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Favored/underdog heuristic with per-player K-factors.
    Legacy,
    /// Elo-style logistic probability model with team-level K.
    Elo,
}

impl StrategyKind {
    /// Parse a strategy name as used in configuration and CLI flags.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "legacy" | "heuristic" => Some(StrategyKind::Legacy),
            "elo" | "probability" => Some(StrategyKind::Elo),
            _ => None,
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::Legacy => write!(f, "legacy"),
            StrategyKind::Elo => write!(f, "elo"),
        }
    }
}
