//! Output language for rendered labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language used for labels handed to the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    French,
}

impl Language {
    /// Decimal mark used when formatting numbers.
    pub fn decimal_mark(self) -> char {
        match self {
            Self::English => '.',
            Self::French => ',',
        }
    }

    /// Short code (`en`, `fr`).
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::French => "fr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "fr" | "french" => Ok(Self::French),
            other => Err(format!("unknown language '{other}' (expected en or fr)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_codes() {
        assert_eq!("fr".parse::<Language>().unwrap(), Language::French);
        assert_eq!(" English ".parse::<Language>().unwrap(), Language::English);
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_decimal_mark() {
        assert_eq!(Language::English.decimal_mark(), '.');
        assert_eq!(Language::French.decimal_mark(), ',');
    }
}
