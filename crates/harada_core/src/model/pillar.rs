//! Pillar domain model.
//!
//! # Responsibility
//! - Define one of the eight themed sub-goals surrounding the core goal.
//! - Own the color tag inherited by every task of the pillar.
//!
//! # Invariants
//! - `position` is unique per chart (enforced by `Chart::validate()`).
//! - `name` must not be blank.

use super::position::RingPosition;
use super::ParseVariantError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for a pillar.
pub type PillarId = Uuid;

/// Display color tag shared by a pillar and its tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PillarColor {
    #[default]
    Blue,
    Red,
    Green,
    Purple,
    Yellow,
    Pink,
    Indigo,
    Orange,
}

impl PillarColor {
    /// All supported colors in declaration order.
    pub const ALL: [PillarColor; 8] = [
        Self::Blue,
        Self::Red,
        Self::Green,
        Self::Purple,
        Self::Yellow,
        Self::Pink,
        Self::Indigo,
        Self::Orange,
    ];

    /// Stable wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Yellow => "yellow",
            Self::Pink => "pink",
            Self::Indigo => "indigo",
            Self::Orange => "orange",
        }
    }
}

impl Display for PillarColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PillarColor {
    type Err = ParseVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == normalized)
            .ok_or_else(|| ParseVariantError::new("pillar color", value))
    }
}

/// One themed sub-goal of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    pub id: PillarId,
    pub name: String,
    #[serde(default)]
    pub color: PillarColor,
    /// Slot in the center ring; also selects the outer 3x3 block.
    pub position: RingPosition,
}

impl Pillar {
    /// Creates a pillar with a generated id and the default color.
    pub fn new(position: RingPosition, name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), position, name)
    }

    /// Creates a pillar with a caller-provided id.
    pub fn with_id(id: PillarId, position: RingPosition, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: PillarColor::default(),
            position,
        }
    }

    /// Builder-style color override.
    pub fn colored(mut self, color: PillarColor) -> Self {
        self.color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::PillarColor;

    #[test]
    fn color_parse_is_case_insensitive() {
        assert_eq!(" Indigo ".parse::<PillarColor>().unwrap(), PillarColor::Indigo);
        assert_eq!("orange".parse::<PillarColor>().unwrap(), PillarColor::Orange);
    }

    #[test]
    fn color_parse_rejects_unknown_values() {
        let err = "teal".parse::<PillarColor>().unwrap_err();
        assert!(err.to_string().contains("teal"));
    }

    #[test]
    fn default_color_is_blue() {
        assert_eq!(PillarColor::default(), PillarColor::Blue);
    }
}
