//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::{BTreeMap, BTreeSet};

/// SmallVec sized for per-group scenario values (usually <8 scenarios).
pub type SmallVec8<T> = SmallVec<[T; 8]>;
