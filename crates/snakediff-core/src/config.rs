//! Configuration for the diff engine.
//!
//! `DiffConfig` holds the optional search caps a latency-bounded caller can
//! set. The default configuration is unbounded and always yields a minimal
//! edit script.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What to do when a configured cap stops a search before it finishes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitBehavior {
    /// Emit delete-all then insert-all for the unresolved rectangle
    #[default]
    Fallback,
    /// Fail the whole call with `DiffError::LimitExceeded`
    ReturnError,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Maximum rounds a single middle-snake search may run
    pub max_rounds: Option<usize>,
    /// Maximum number of nested splits below the root rectangle
    pub max_depth: Option<usize>,
    pub on_limit_exceeded: LimitBehavior,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero when set")]
    ZeroLimit { field: &'static str },
}

impl DiffConfig {
    /// Unbounded search, minimal scripts only
    pub fn exact() -> Self {
        Self::default()
    }

    /// Cap every search at `rounds` and fall back past it
    pub fn bounded(rounds: usize) -> Self {
        Self {
            max_rounds: Some(rounds),
            ..Default::default()
        }
    }

    pub fn builder() -> DiffConfigBuilder {
        DiffConfigBuilder {
            inner: DiffConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rounds == Some(0) {
            return Err(ConfigError::ZeroLimit {
                field: "max_rounds",
            });
        }
        if self.max_depth == Some(0) {
            return Err(ConfigError::ZeroLimit { field: "max_depth" });
        }
        Ok(())
    }

    /// True when no cap is set, so every result is minimal
    pub fn is_exact(&self) -> bool {
        self.max_rounds.is_none() && self.max_depth.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct DiffConfigBuilder {
    inner: DiffConfig,
}

impl DiffConfigBuilder {
    pub fn max_rounds(mut self, rounds: usize) -> Self {
        self.inner.max_rounds = Some(rounds);
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.inner.max_depth = Some(depth);
        self
    }

    pub fn on_limit_exceeded(mut self, behavior: LimitBehavior) -> Self {
        self.inner.on_limit_exceeded = behavior;
        self
    }

    pub fn build(self) -> Result<DiffConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}
