//! Whisker range selection for summary-based panels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which pair of summary bounds a panel draws as its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeKind {
    /// `min..max` over all scenarios.
    Full,
    /// `trimmed_min..trimmed_max`, dropping the single most extreme scenario each side.
    #[default]
    Trimmed,
}

impl RangeKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Trimmed => "trimmed",
        }
    }
}

impl fmt::Display for RangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RangeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "trimmed" => Ok(Self::Trimmed),
            other => Err(format!("unknown range kind '{other}' (expected full or trimmed)")),
        }
    }
}
