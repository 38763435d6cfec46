//! Ring position value type.
//!
//! # Responsibility
//! - Represent one of the eight slots arranged clockwise from the upper-left
//!   around a center cell.
//! - Reject out-of-range values at construction and deserialization.
//!
//! # Invariants
//! - Wrapped value is always within `1..=8`.
//!
//! Layout around a center cell:
//!
//! ```text
//! 1 2 3
//! 8 . 4
//! 7 6 5
//! ```

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of ring positions around any center cell.
pub const RING_SIZE: usize = 8;

/// 1-based slot index around a center cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RingPosition(u8);

impl RingPosition {
    /// All ring positions in clockwise order starting at the upper-left.
    pub const ALL: [RingPosition; RING_SIZE] = [
        RingPosition(1),
        RingPosition(2),
        RingPosition(3),
        RingPosition(4),
        RingPosition(5),
        RingPosition(6),
        RingPosition(7),
        RingPosition(8),
    ];

    /// Validates and wraps a 1-based position.
    pub fn new(value: u8) -> Result<Self, PositionError> {
        if (1..=RING_SIZE as u8).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PositionError::OutOfRange(i64::from(value)))
        }
    }

    /// Returns the 1-based value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the 0-based table index for this position.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Inverse of [`RingPosition::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl TryFrom<u8> for RingPosition {
    type Error = PositionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for RingPosition {
    type Error = PositionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| PositionError::OutOfRange(value))
            .and_then(|narrow| Self::new(narrow).map_err(|_| PositionError::OutOfRange(value)))
    }
}

impl From<RingPosition> for u8 {
    fn from(value: RingPosition) -> Self {
        value.0
    }
}

impl Display for RingPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ring position construction error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    OutOfRange(i64),
}

impl Display for PositionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(value) => {
                write!(f, "ring position must be within 1..=8, got {value}")
            }
        }
    }
}

impl Error for PositionError {}
