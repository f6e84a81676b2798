//! Configuration for distance engines.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TdlError};

/// Capacity of the shared engine behind [`crate::distance`].
pub const DEFAULT_MAX_SIZE: usize = 100;

/// Configuration for a [`crate::DamerauLevenshtein`] engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Longest input, in characters, the engine accepts.
    /// The workspace holds `(max_size + 2)^2` cells.
    pub max_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with the given capacity.
    pub fn new(max_size: usize) -> Self {
        Self { max_size }
    }

    /// Set the capacity.
    pub fn max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Check that the configuration can back an engine.
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(TdlError::invalid_argument(
                "max_size must be greater than zero",
            ));
        }
        // The workspace byte size must fit in an allocation.
        let bytes = self
            .max_size
            .checked_add(2)
            .and_then(|stride| stride.checked_mul(stride))
            .and_then(|cells| cells.checked_mul(std::mem::size_of::<usize>()));
        if bytes.is_none_or(|bytes| bytes > isize::MAX as usize) {
            return Err(TdlError::invalid_argument(format!(
                "max_size {} is too large for the workspace",
                self.max_size
            )));
        }
        Ok(())
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config
            .validate()
            .map_err(|e| TdlError::config(e.to_string()))?;
        Ok(config)
    }
}
