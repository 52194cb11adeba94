//! TradeoffErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable code string that
/// callers (and log consumers) can match on without parsing messages.
pub trait TradeoffErrorCode {
    /// Returns the error code string (e.g., "SCHEMA_MISMATCH").
    fn error_code(&self) -> &'static str;

    /// Returns the tagged error string: `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCHEMA_MISMATCH: &str = "SCHEMA_MISMATCH";
pub const EMPTY_GROUP: &str = "EMPTY_GROUP";
pub const UNKNOWN_METRIC: &str = "UNKNOWN_METRIC";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
