//! PTI Engine - rating adjustment engine for doubles racquet leagues
//!
//! This crate computes per-player rating changes for completed 2v2
//! matches: a calibrated conversion between the display rating and the
//! internal performance value, a lenient set-score parser, and two
//! selectable adjustment strategies kept side by side for comparison
//! against the third-party reference calculator.

pub mod config;
pub mod engine;
pub mod error;
pub mod rating;
pub mod score;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{EngineError, Result};
pub use types::*;

// Re-export key components
pub use config::EngineConfig;
pub use engine::{rate_match, RatingEngine};
pub use rating::AdjustmentStrategy;
pub use score::{match_winner, parse_scores, SetResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
