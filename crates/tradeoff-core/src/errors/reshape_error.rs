//! Reshaping errors.

use super::error_code::{self, TradeoffErrorCode};

/// Errors that can occur while reshaping or aggregating metric tables.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReshapeError {
    #[error("Schema mismatch in {table}: {message}")]
    SchemaMismatch { table: String, message: String },

    #[error("No non-missing values for MP '{mp}', metric '{metric}'")]
    EmptyGroup { mp: String, metric: String },

    #[error("Unknown metric '{metric}'")]
    UnknownMetric { metric: String },
}

impl ReshapeError {
    pub fn schema(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            table: table.into(),
            message: message.into(),
        }
    }
}

impl TradeoffErrorCode for ReshapeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SchemaMismatch { .. } => error_code::SCHEMA_MISMATCH,
            Self::EmptyGroup { .. } => error_code::EMPTY_GROUP,
            Self::UnknownMetric { .. } => error_code::UNKNOWN_METRIC,
        }
    }
}
