//! Label locale configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DIGITS;
use crate::types::Language;

/// Output language and numeric precision for rendered labels.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LocaleConfig {
    /// Default: English.
    pub language: Option<Language>,
    /// Decimal digits in labels. Default: 2.
    pub digits: Option<u32>,
}

impl LocaleConfig {
    pub fn effective_language(&self) -> Language {
        self.language.unwrap_or_default()
    }

    pub fn effective_digits(&self) -> u32 {
        self.digits.unwrap_or(DEFAULT_DIGITS)
    }
}
