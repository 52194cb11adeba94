//! Marker style configuration.

use serde::{Deserialize, Serialize};

use crate::types::MarkerShape;

/// Shapes used for reference and non-reference MPs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StyleConfig {
    /// Default: cross.
    pub reference_shape: Option<MarkerShape>,
    /// Default: filled circle.
    pub default_shape: Option<MarkerShape>,
}

impl StyleConfig {
    pub fn effective_reference_shape(&self) -> MarkerShape {
        self.reference_shape.unwrap_or(MarkerShape::Cross)
    }

    pub fn effective_default_shape(&self) -> MarkerShape {
        self.default_shape.unwrap_or(MarkerShape::FilledCircle)
    }
}
