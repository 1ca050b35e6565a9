//! Error types for the rating engine
//!
//! The calculation path itself never fails: malformed score segments are
//! dropped, unknown tiers default, and an unusable score degrades to a
//! neutral result. Errors exist only at configuration and construction
//! time.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for engine configuration scenarios
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Unknown strategy name: {name}")]
    UnknownStrategy { name: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
