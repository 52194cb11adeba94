//! Data model shared by every reshaping stage.

pub mod collections;
pub mod locale;
pub mod range;
pub mod records;
pub mod style;
pub mod table;

pub use locale::Language;
pub use range::RangeKind;
pub use records::{LongFormRecord, SummaryRecord};
pub use style::{MarkerShape, Style};
pub use table::{CellValue, PerformanceMetricTable, ScenarioCollection};
