//! Marker style assignment.

use tradeoff_core::config::StyleConfig;
use tradeoff_core::types::collections::{BTreeMap, BTreeSet};
use tradeoff_core::types::{MarkerShape, Style};

use super::reference::ReferenceClassifier;

/// Assigns one shape to reference MPs and another to everything else.
///
/// Output is a `BTreeMap`, so the mapping (and any legend built from it) is
/// identical across repeated calls with the same input.
#[derive(Debug, Clone)]
pub struct StyleAssigner {
    reference: Style,
    default: Style,
    classifier: ReferenceClassifier,
}

impl StyleAssigner {
    pub fn new(
        reference_shape: MarkerShape,
        default_shape: MarkerShape,
        classifier: ReferenceClassifier,
    ) -> Self {
        Self {
            reference: Style::new(reference_shape),
            default: Style::new(default_shape),
            classifier,
        }
    }

    pub fn from_config(config: &StyleConfig, classifier: ReferenceClassifier) -> Self {
        Self::new(
            config.effective_reference_shape(),
            config.effective_default_shape(),
            classifier,
        )
    }

    /// Style every id in `mp_ids`. An MP without an entry in
    /// `reference_flags` is classified from its name.
    pub fn assign(
        &self,
        mp_ids: &BTreeSet<String>,
        reference_flags: &BTreeMap<String, bool>,
    ) -> BTreeMap<String, Style> {
        mp_ids
            .iter()
            .map(|mp| {
                let is_reference = reference_flags
                    .get(mp)
                    .copied()
                    .unwrap_or_else(|| self.classifier.is_reference(mp));
                let style = if is_reference {
                    self.reference
                } else {
                    self.default
                };
                (mp.clone(), style)
            })
            .collect()
    }
}

impl Default for StyleAssigner {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default(), ReferenceClassifier::default())
    }
}

/// Assign styles with the default shapes (cross for reference MPs, filled
/// circle otherwise).
pub fn assign_styles(
    mp_ids: &BTreeSet<String>,
    reference_flags: &BTreeMap<String, bool>,
) -> BTreeMap<String, Style> {
    StyleAssigner::default().assign(mp_ids, reference_flags)
}
