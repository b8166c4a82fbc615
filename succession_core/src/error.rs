//! Error types for the succession engine.

use lineage_model::{DignityId, DisputeId};
use thiserror::Error;

/// Errors raised by dignity mutators.
///
/// Classification and succession queries never fail; missing data there is
/// answered with empty results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SuccessionError {
    #[error("dignity {0} not found")]
    DignityNotFound(DignityId),

    #[error("dispute {dispute} not found on dignity {dignity}")]
    DisputeNotFound {
        dignity: DignityId,
        dispute: DisputeId,
    },
}

/// Errors loading engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid engine configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field} must be at least 1")]
    ZeroLimit { field: &'static str },
}

pub type Result<T, E = SuccessionError> = std::result::Result<T, E>;
