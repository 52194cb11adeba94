//! # tradeoff-core
//!
//! Foundation crate for MSE trade-off reshaping.
//! Defines the data model, errors, config, tracing setup, and constants.
//! The analysis crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::TradeoffConfig;
pub use errors::{ConfigError, ReshapeError, TradeoffError};
pub use types::{
    CellValue, Language, LongFormRecord, MarkerShape, PerformanceMetricTable, RangeKind,
    ScenarioCollection, Style, SummaryRecord,
};
