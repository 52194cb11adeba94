//! Shared constants for trade-off reshaping.

/// Name of the identifier column every performance-metric table must carry.
pub const MP_COLUMN: &str = "MP";

/// Substring that marks a management procedure as a reference/benchmark.
pub const DEFAULT_REFERENCE_MARKER: &str = "ref";

/// Default number of decimal digits in rendered labels.
pub const DEFAULT_DIGITS: u32 = 2;

/// Upper bound on configurable label digits.
pub const MAX_DIGITS: u32 = 6;

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "tradeoff.toml";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "TRADEOFF_LOG";

/// Filter used when `TRADEOFF_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "tradeoff=info";
