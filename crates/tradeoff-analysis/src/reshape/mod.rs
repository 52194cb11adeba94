//! Performance-metric reshaper.
//!
//! Turns per-scenario metric tables into the row layouts plots consume:
//! long-form records for faceted views, per-MP summaries for single-panel
//! views, and a marker style per MP.

pub mod labels;
pub mod long_form;
pub mod panels;
pub mod pipeline;
pub mod reference;
pub mod styles;
pub mod summary;

pub use labels::ValueFormatter;
pub use long_form::{retained_mp_ids, to_long_form, to_long_form_with};
pub use panels::{
    dot_ranges, facet_points, tradeoff_points, DotRangeRecord, FacetPoint, TradeoffPoint,
};
pub use pipeline::{ReshapeDiagnostics, ReshapePipeline, ReshapeResult};
pub use reference::{classify_reference, ReferenceClassifier};
pub use styles::{assign_styles, StyleAssigner};
pub use summary::to_summary;
