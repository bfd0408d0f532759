//! The closed set of coloring effects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// How the stops of a request map onto characters.
///
/// `Middle` and `ThreeColor` compute the same three-stop gradient; they are
/// kept apart because callers expose them under different names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// One color for the whole text.
    Solid,
    /// Two-stop gradient, start to end.
    Horizontal,
    /// Three-stop gradient through a middle color.
    Middle,
    /// Three-stop gradient through a middle color.
    ThreeColor,
}

impl EffectKind {
    pub const ALL: [EffectKind; 4] = [
        EffectKind::Solid,
        EffectKind::Horizontal,
        EffectKind::Middle,
        EffectKind::ThreeColor,
    ];

    /// Returns the keyword this effect parses from.
    pub fn as_str(self) -> &'static str {
        match self {
            EffectKind::Solid => "solid",
            EffectKind::Horizontal => "horizontal",
            EffectKind::Middle => "middle",
            EffectKind::ThreeColor => "three_color",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectKind {
    type Err = ValidationError;

    /// Parses an effect keyword, ignoring ASCII case.
    ///
    /// `three-color` and `threecolor` are accepted as spellings of
    /// `three_color`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" => Ok(EffectKind::Solid),
            "horizontal" => Ok(EffectKind::Horizontal),
            "middle" => Ok(EffectKind::Middle),
            "three_color" | "three-color" | "threecolor" => Ok(EffectKind::ThreeColor),
            _ => Err(ValidationError::UnknownEffect(s.to_string())),
        }
    }
}
