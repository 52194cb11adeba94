//! Typed rows produced by reshaping.

use serde::{Deserialize, Serialize};

/// One (MP, scenario, metric) observation from a flattened scenario collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongFormRecord {
    pub mp: String,
    pub scenario: String,
    pub metric: String,
    /// `None` when the source cell was missing, non-numeric, or NaN.
    pub value: Option<f64>,
    pub is_reference: bool,
}

/// Per (MP, metric) aggregate across all scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub mp: String,
    pub metric: String,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Minimum after dropping one occurrence of the minimum. `None` below 2 observations.
    pub trimmed_min: Option<f64>,
    /// Maximum after dropping one occurrence of the maximum. `None` below 2 observations.
    pub trimmed_max: Option<f64>,
    pub is_reference: bool,
    /// Number of non-missing values aggregated.
    pub observations: usize,
}
