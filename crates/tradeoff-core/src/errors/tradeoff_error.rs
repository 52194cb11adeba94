//! Top-level error for callers that load config and reshape in one go.

use super::error_code::TradeoffErrorCode;
use super::{ConfigError, ReshapeError};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum TradeoffError {
    #[error("Reshape error: {0}")]
    Reshape(#[from] ReshapeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TradeoffErrorCode for TradeoffError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Reshape(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
