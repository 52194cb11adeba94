//! Reshaping configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REFERENCE_MARKER;
use crate::types::RangeKind;

/// Configuration for long-form flattening and summary panels.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReshapeConfig {
    /// Substring marking reference MPs (case-sensitive). Default: "ref".
    pub reference_marker: Option<String>,
    /// Range drawn by summary panels. Default: trimmed.
    pub summary_range: Option<RangeKind>,
}

impl ReshapeConfig {
    /// Returns the effective reference marker, defaulting to "ref".
    pub fn effective_reference_marker(&self) -> &str {
        self.reference_marker
            .as_deref()
            .unwrap_or(DEFAULT_REFERENCE_MARKER)
    }

    /// Returns the effective summary range, defaulting to trimmed.
    pub fn effective_summary_range(&self) -> RangeKind {
        self.summary_range.unwrap_or_default()
    }
}
