//! Reference-MP classification by naming convention.

use tradeoff_core::constants::DEFAULT_REFERENCE_MARKER;

/// Classifies MP identifiers as reference/benchmark procedures by a
/// case-sensitive substring marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceClassifier {
    marker: String,
}

impl ReferenceClassifier {
    /// An empty marker matches every identifier. `TradeoffConfig::validate`
    /// rejects one, and `ReshapePipeline` only accepts validated configs.
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn is_reference(&self, mp_id: &str) -> bool {
        mp_id.contains(self.marker.as_str())
    }
}

impl Default for ReferenceClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_MARKER)
    }
}

/// True iff `mp_id` contains the conventional reference marker `"ref"`.
pub fn classify_reference(mp_id: &str) -> bool {
    mp_id.contains(DEFAULT_REFERENCE_MARKER)
}
