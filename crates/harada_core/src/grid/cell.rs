//! Grid cell descriptors.
//!
//! Cells are owned view copies of entity data. The two pillar cells written
//! for one pillar never alias each other.

use crate::model::pillar::{PillarColor, PillarId};
use crate::model::position::RingPosition;
use crate::model::task::{TaskFrequency, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};

/// Title carried by the goal cell.
pub const CORE_GOAL_TITLE: &str = "Core Goal";

/// Character budget for the goal when shown outside the grid.
pub const DEFAULT_DISPLAY_CHARS: usize = 50;

/// One placed grid cell, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Cell {
    CoreGoal(GoalCell),
    Pillar(PillarCell),
    Task(TaskCell),
    TaskEmpty(EmptyTaskCell),
}

/// Discriminant of [`Cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    CoreGoal,
    Pillar,
    Task,
    TaskEmpty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalCell {
    /// Full goal text, never truncated by the builder.
    pub content: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarCell {
    pub id: PillarId,
    pub name: String,
    pub color: PillarColor,
    pub position: RingPosition,
    /// `true` for the copy at the outer block center.
    pub mirrored: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCell {
    pub id: TaskId,
    pub title: String,
    pub status: TaskStatus,
    pub frequency: TaskFrequency,
    /// Inherited from the owning pillar.
    pub color: PillarColor,
    pub pillar_id: PillarId,
    pub pillar_position: RingPosition,
    pub position: RingPosition,
}

/// Vacant task slot of a present pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyTaskCell {
    pub color: PillarColor,
    pub pillar_id: PillarId,
    pub pillar_position: RingPosition,
    pub position: RingPosition,
}

impl Cell {
    pub fn kind(&self) -> CellKind {
        match self {
            Self::CoreGoal(_) => CellKind::CoreGoal,
            Self::Pillar(_) => CellKind::Pillar,
            Self::Task(_) => CellKind::Task,
            Self::TaskEmpty(_) => CellKind::TaskEmpty,
        }
    }

    /// Primary display text; empty for vacant task slots.
    pub fn content(&self) -> &str {
        match self {
            Self::CoreGoal(cell) => cell.content.as_str(),
            Self::Pillar(cell) => cell.name.as_str(),
            Self::Task(cell) => cell.title.as_str(),
            Self::TaskEmpty(_) => "",
        }
    }

    /// Color of pillar-derived cells.
    pub fn color(&self) -> Option<PillarColor> {
        match self {
            Self::CoreGoal(_) => None,
            Self::Pillar(cell) => Some(cell.color),
            Self::Task(cell) => Some(cell.color),
            Self::TaskEmpty(cell) => Some(cell.color),
        }
    }
}

/// Shortens `text` to `max_chars` characters plus `...` for display.
///
/// Presentation helper only; grid cells always keep the full text.
pub fn truncate_for_display(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated = text.chars().take(max_chars).collect::<String>();
    truncated.push_str("...");
    truncated
}
