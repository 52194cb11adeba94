//! Configuration system.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod locale_config;
pub mod reshape_config;
pub mod style_config;
pub mod tradeoff_config;

pub use locale_config::LocaleConfig;
pub use reshape_config::ReshapeConfig;
pub use style_config::StyleConfig;
pub use tradeoff_config::{ConfigOverrides, TradeoffConfig};
