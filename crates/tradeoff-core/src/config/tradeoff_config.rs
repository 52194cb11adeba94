//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{LocaleConfig, ReshapeConfig, StyleConfig};
use crate::constants::{MAX_DIGITS, PROJECT_CONFIG_FILE};
use crate::errors::ConfigError;
use crate::types::{Language, RangeKind};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`TRADEOFF_*`)
/// 3. Project config (`tradeoff.toml` in project root)
/// 4. User config (`~/.tradeoff/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TradeoffConfig {
    pub reshape: ReshapeConfig,
    pub style: StyleConfig,
    pub locale: LocaleConfig,
}

/// Caller-supplied overrides, e.g. from a plotting script's arguments.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub reference_marker: Option<String>,
    pub summary_range: Option<RangeKind>,
    pub language: Option<Language>,
    pub digits: Option<u32>,
}

impl TradeoffConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;
        tracing::debug!(?config, "configuration resolved");

        Ok(config)
    }

    /// Load and validate configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: TradeoffConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &TradeoffConfig) -> Result<(), ConfigError> {
        if let Some(ref marker) = config.reshape.reference_marker {
            if marker.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "reshape.reference_marker".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if config.style.effective_reference_shape() == config.style.effective_default_shape() {
            return Err(ConfigError::ValidationFailed {
                field: "style.reference_shape".to_string(),
                message: "must differ from style.default_shape".to_string(),
            });
        }
        if let Some(digits) = config.locale.digits {
            if digits > MAX_DIGITS {
                return Err(ConfigError::ValidationFailed {
                    field: "locale.digits".to_string(),
                    message: format!("must be between 0 and {MAX_DIGITS}"),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.tradeoff/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".tradeoff").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut TradeoffConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: TradeoffConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut TradeoffConfig, other: &TradeoffConfig) {
        if other.reshape.reference_marker.is_some() {
            base.reshape.reference_marker = other.reshape.reference_marker.clone();
        }
        if other.reshape.summary_range.is_some() {
            base.reshape.summary_range = other.reshape.summary_range;
        }

        if other.style.reference_shape.is_some() {
            base.style.reference_shape = other.style.reference_shape;
        }
        if other.style.default_shape.is_some() {
            base.style.default_shape = other.style.default_shape;
        }

        if other.locale.language.is_some() {
            base.locale.language = other.locale.language;
        }
        if other.locale.digits.is_some() {
            base.locale.digits = other.locale.digits;
        }
    }

    /// Apply environment variable overrides.
    /// Unparsable values are logged and skipped.
    fn apply_env_overrides(config: &mut TradeoffConfig) {
        if let Ok(val) = std::env::var("TRADEOFF_REFERENCE_MARKER") {
            config.reshape.reference_marker = Some(val);
        }
        if let Some(v) = parse_env::<RangeKind>("TRADEOFF_SUMMARY_RANGE") {
            config.reshape.summary_range = Some(v);
        }
        if let Some(v) = parse_env::<Language>("TRADEOFF_LANGUAGE") {
            config.locale.language = Some(v);
        }
        if let Some(v) = parse_env::<u32>("TRADEOFF_DIGITS") {
            config.locale.digits = Some(v);
        }
    }

    /// Apply programmatic overrides (highest priority).
    fn apply_overrides(config: &mut TradeoffConfig, o: &ConfigOverrides) {
        if let Some(ref v) = o.reference_marker {
            config.reshape.reference_marker = Some(v.clone());
        }
        if let Some(v) = o.summary_range {
            config.reshape.summary_range = Some(v);
        }
        if let Some(v) = o.language {
            config.locale.language = Some(v);
        }
        if let Some(v) = o.digits {
            config.locale.digits = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn parse_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = std::env::var(key).ok()?;
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(key, value = %raw, error = %e, "ignoring invalid environment override");
            None
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
