//! Chart entity model: goal, pillars, tasks.
//!
//! # Responsibility
//! - Define the entity collections consumed by the grid builder.
//! - Keep positional invariants expressible in types (`RingPosition`).
//!
//! # Invariants
//! - Every entity is identified by a stable UUID.
//! - Ring positions are 1-based and always within `1..=8`.

pub mod chart;
pub mod pillar;
pub mod position;
pub mod task;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for parsing an enum from its wire string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVariantError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseVariantError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl Display for ParseVariantError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {}: `{}`", self.kind, self.value)
    }
}

impl Error for ParseVariantError {}
