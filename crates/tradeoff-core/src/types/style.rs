//! Marker styles assigned per management procedure.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Point marker shape. Color is left to the rendering collaborator's palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerShape {
    Circle,
    FilledCircle,
    Triangle,
    Square,
    Diamond,
    Cross,
    Plus,
}

impl MarkerShape {
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::FilledCircle => "filled_circle",
            Self::Triangle => "triangle",
            Self::Square => "square",
            Self::Diamond => "diamond",
            Self::Cross => "cross",
            Self::Plus => "plus",
        }
    }
}

impl fmt::Display for MarkerShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MarkerShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(Self::Circle),
            "filled_circle" => Ok(Self::FilledCircle),
            "triangle" => Ok(Self::Triangle),
            "square" => Ok(Self::Square),
            "diamond" => Ok(Self::Diamond),
            "cross" => Ok(Self::Cross),
            "plus" => Ok(Self::Plus),
            other => Err(format!("unknown marker shape '{other}'")),
        }
    }
}

/// Visual style of one management procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    pub shape: MarkerShape,
}

impl Style {
    pub fn new(shape: MarkerShape) -> Self {
        Self { shape }
    }
}
