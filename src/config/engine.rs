//! Engine configuration
//!
//! Selects the adjustment strategy and carries the tunable constants of
//! the probability model, with environment variable loading and
//! validation.

use crate::error::{EngineError, Result};
use crate::types::StrategyKind;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::env;

/// Configuration for a [`RatingEngine`](crate::engine::RatingEngine).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Which adjustment model to run.
    pub strategy: StrategyKind,
    /// Base K-factor for the probability model.
    pub base_k: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Legacy,
            base_k: 4.0,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables with fallback to
    /// defaults.
    ///
    /// Recognized variables: `RATING_STRATEGY` (`legacy` or `elo`) and
    /// `RATING_BASE_K`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(name) = env::var("RATING_STRATEGY") {
            config.strategy = StrategyKind::from_name(&name)
                .ok_or(EngineError::UnknownStrategy { name })?;
        }
        if let Ok(base_k) = env::var("RATING_BASE_K") {
            config.base_k = base_k
                .parse()
                .map_err(|_| anyhow!("Invalid RATING_BASE_K value: {}", base_k))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
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
