//! Error handling for trade-off reshaping.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod reshape_error;
pub mod tradeoff_error;

pub use config_error::ConfigError;
pub use error_code::TradeoffErrorCode;
pub use reshape_error::ReshapeError;
pub use tradeoff_error::TradeoffError;
