//! Task domain model.
//!
//! # Responsibility
//! - Define one action item placed in a pillar's outer 3x3 block.
//! - Provide status/frequency enums with stable wire names.
//!
//! # Invariants
//! - `position` is unique within the owning pillar.
//! - `pillar_id` references exactly one pillar of the same chart.

use super::pillar::PillarId;
use super::position::RingPosition;
use super::ParseVariantError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created but not started.
    #[default]
    Todo,
    /// Work is in progress.
    InProgress,
    /// Completed; counts toward chart completion.
    Done,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ParseVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseVariantError::new("task status", value)),
        }
    }
}

/// How often a task is meant to be carried out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFrequency {
    #[default]
    OneTime,
    Routine,
}

impl TaskFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneTime => "one_time",
            Self::Routine => "routine",
        }
    }
}

impl Display for TaskFrequency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskFrequency {
    type Err = ParseVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "one_time" => Ok(Self::OneTime),
            "routine" => Ok(Self::Routine),
            _ => Err(ParseVariantError::new("task frequency", value)),
        }
    }
}

/// One action item of a pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub pillar_id: PillarId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub frequency: TaskFrequency,
    /// Slot around the pillar's mirrored center cell.
    pub position: RingPosition,
}

impl Task {
    /// Creates a `todo`, `one_time` task with a generated id.
    pub fn new(pillar_id: PillarId, position: RingPosition, title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), pillar_id, position, title)
    }

    /// Creates a task with a caller-provided id.
    pub fn with_id(
        id: TaskId,
        pillar_id: PillarId,
        position: RingPosition,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id,
            pillar_id,
            title: title.into(),
            description: String::new(),
            status: TaskStatus::default(),
            frequency: TaskFrequency::default(),
            position,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}

/// Returns the chart completion percentage for a task set.
///
/// `round(100 * done / total)` with ties rounded to even; `0` when empty.
pub fn completion_percentage(tasks: &[Task]) -> u8 {
    let total = tasks.len() as u64;
    if total == 0 {
        return 0;
    }
    let done = tasks.iter().filter(|task| task.is_done()).count() as u64;

    let numerator = done * 100;
    let mut quotient = numerator / total;
    let twice_remainder = (numerator % total) * 2;
    if twice_remainder > total || (twice_remainder == total && quotient % 2 == 1) {
        quotient += 1;
    }
    // done <= total keeps the quotient within 0..=100.
    quotient as u8
}
