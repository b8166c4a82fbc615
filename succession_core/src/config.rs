//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Limits for succession traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Deepest generation (relative to the holder) visited when building a
    /// line of succession.
    pub max_depth: u32,

    /// Only candidates within this many generations can be named heir.
    pub heir_generation_limit: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            heir_generation_limit: 5,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from TOML. Missing keys keep their defaults.
    ///
    /// ```toml
    /// max_depth = 8
    /// heir_generation_limit = 4
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroLimit { field: "max_depth" });
        }
        if self.heir_generation_limit == 0 {
            return Err(ConfigError::ZeroLimit {
                field: "heir_generation_limit",
            });
        }
        Ok(())
    }
}
