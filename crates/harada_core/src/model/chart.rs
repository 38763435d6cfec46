//! Chart aggregate: one goal, up to 8 pillars, up to 64 tasks.
//!
//! # Responsibility
//! - Hold the entity collections consumed by the grid builder.
//! - Validate chart-wide positional and referential invariants.
//! - Provide in-memory edit operations for authoring and matrix edits.
//!
//! # Invariants
//! - Pillar positions are unique per chart; task positions are unique per pillar.
//! - Every task references a pillar of the same chart.
//! - Edit operations either fully apply or leave the chart unchanged.

use super::pillar::{Pillar, PillarColor, PillarId};
use super::position::RingPosition;
use super::task::{completion_percentage, Task, TaskFrequency, TaskId, TaskStatus};
use chrono::format::ParseErrorKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a chart.
pub type ChartId = Uuid;

const TARGET_DATE_FORMAT: &str = "%Y-%m-%d";

/// Four framing perspectives recorded alongside the core goal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Perspectives {
    pub self_tangible: String,
    pub self_intangible: String,
    pub others_tangible: String,
    pub others_intangible: String,
}

/// Goal-level fields set in the first authoring step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalDraft {
    pub title: String,
    pub core_goal: String,
    /// `YYYY-MM-DD`.
    pub target_date: Option<String>,
    pub perspectives: Perspectives,
}

/// Partial pillar update; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PillarUpdate {
    pub name: Option<String>,
    pub color: Option<PillarColor>,
}

/// Partial task update; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub frequency: Option<TaskFrequency>,
}

/// Fields for a task created in an empty slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub frequency: TaskFrequency,
}

/// Harada chart aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    pub id: ChartId,
    pub title: String,
    /// Long-term objective placed at the grid center.
    pub core_goal: String,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    /// True while authoring steps are incomplete.
    #[serde(default = "default_is_draft")]
    pub is_draft: bool,
    #[serde(default)]
    pub perspectives: Perspectives,
    #[serde(default)]
    pub pillars: Vec<Pillar>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

fn default_is_draft() -> bool {
    true
}

impl Chart {
    /// Creates an empty draft chart with a generated id.
    pub fn new(title: impl Into<String>, core_goal: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            core_goal: core_goal.into(),
            target_date: None,
            is_draft: true,
            perspectives: Perspectives::default(),
            pillars: Vec::new(),
            tasks: Vec::new(),
        }
    }

    /// Checks every positional and referential invariant of the chart.
    ///
    /// # Errors
    /// - Returns the first violation found, pillars before tasks.
    pub fn validate(&self) -> Result<(), ChartValidationError> {
        let mut pillar_ids = HashSet::new();
        let mut pillar_positions = HashSet::new();
        for pillar in &self.pillars {
            if pillar.name.trim().is_empty() {
                return Err(ChartValidationError::BlankPillarName(pillar.id));
            }
            if !pillar_ids.insert(pillar.id) {
                return Err(ChartValidationError::DuplicatePillarId(pillar.id));
            }
            if !pillar_positions.insert(pillar.position) {
                return Err(ChartValidationError::DuplicatePillarPosition(
                    pillar.position,
                ));
            }
        }

        let mut task_ids = HashSet::new();
        let mut task_slots = HashSet::new();
        for task in &self.tasks {
            if task.title.trim().is_empty() {
                return Err(ChartValidationError::BlankTaskTitle(task.id));
            }
            if !task_ids.insert(task.id) {
                return Err(ChartValidationError::DuplicateTaskId(task.id));
            }
            if !pillar_ids.contains(&task.pillar_id) {
                return Err(ChartValidationError::UnknownPillar {
                    task_id: task.id,
                    pillar_id: task.pillar_id,
                });
            }
            if !task_slots.insert((task.pillar_id, task.position)) {
                return Err(ChartValidationError::DuplicateTaskPosition {
                    pillar_id: task.pillar_id,
                    position: task.position,
                });
            }
        }

        Ok(())
    }

    /// Percentage of tasks marked done, see [`completion_percentage`].
    pub fn completion_percentage(&self) -> u8 {
        completion_percentage(&self.tasks)
    }

    pub fn pillar(&self, id: PillarId) -> Option<&Pillar> {
        self.pillars.iter().find(|pillar| pillar.id == id)
    }

    pub fn pillar_at(&self, position: RingPosition) -> Option<&Pillar> {
        self.pillars.iter().find(|pillar| pillar.position == position)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Returns the task at `(pillar_position, position)` if both exist.
    pub fn task_at(&self, pillar_position: RingPosition, position: RingPosition) -> Option<&Task> {
        let pillar = self.pillar_at(pillar_position)?;
        self.tasks
            .iter()
            .find(|task| task.pillar_id == pillar.id && task.position == position)
    }

    /// Tasks of one pillar ordered by position.
    pub fn tasks_of(&self, pillar_id: PillarId) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|task| task.pillar_id == pillar_id)
            .collect();
        tasks.sort_by_key(|task| task.position);
        tasks
    }

    /// Sets goal-level fields (title, core goal, target date, perspectives).
    pub fn set_goal(&mut self, draft: GoalDraft) -> Result<(), ChartEditError> {
        let target_date = draft
            .target_date
            .as_deref()
            .map(parse_target_date)
            .transpose()?;
        self.title = draft.title;
        self.core_goal = draft.core_goal;
        self.target_date = target_date;
        self.perspectives = draft.perspectives;
        Ok(())
    }

    /// Replaces every pillar from eight optional names indexed by position.
    ///
    /// Blank names leave the position vacant. All existing tasks are dropped
    /// together with the pillars they belonged to.
    ///
    /// Returns the number of pillars created.
    pub fn define_pillars(&mut self, names: [Option<String>; 8]) -> usize {
        self.tasks.clear();
        self.pillars = RingPosition::ALL
            .into_iter()
            .zip(names)
            .filter_map(|(position, name)| {
                let name = name?;
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    return None;
                }
                Some(Pillar::new(position, trimmed))
            })
            .collect();
        self.pillars.len()
    }

    /// Creates or replaces the task at a slot from a bare title.
    ///
    /// Existing tasks are reset to `todo` / `one_time` with an empty
    /// description, keeping their id. Blank titles are ignored and return
    /// `Ok(None)`.
    pub fn upsert_task(
        &mut self,
        pillar_position: RingPosition,
        position: RingPosition,
        title: &str,
    ) -> Result<Option<TaskId>, ChartEditError> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(None);
        }
        let pillar_id = self
            .pillar_at(pillar_position)
            .map(|pillar| pillar.id)
            .ok_or(ChartEditError::PillarVacant(pillar_position))?;

        if let Some(task) = self
            .tasks
            .iter_mut()
            .find(|task| task.pillar_id == pillar_id && task.position == position)
        {
            task.title = title.to_string();
            task.description.clear();
            task.status = TaskStatus::Todo;
            task.frequency = TaskFrequency::OneTime;
            return Ok(Some(task.id));
        }

        let task = Task::new(pillar_id, position, title);
        let id = task.id;
        self.tasks.push(task);
        Ok(Some(id))
    }

    /// Marks authoring complete.
    pub fn finalize(&mut self) {
        self.is_draft = false;
    }

    /// Renames and/or recolors a pillar.
    pub fn update_pillar(
        &mut self,
        id: PillarId,
        update: PillarUpdate,
    ) -> Result<&Pillar, ChartEditError> {
        if let Some(name) = update.name.as_deref() {
            if name.trim().is_empty() {
                return Err(ChartValidationError::BlankPillarName(id).into());
            }
        }
        let pillar = self
            .pillars
            .iter_mut()
            .find(|pillar| pillar.id == id)
            .ok_or(ChartEditError::PillarNotFound(id))?;

        if let Some(name) = update.name {
            pillar.name = name.trim().to_string();
        }
        if let Some(color) = update.color {
            pillar.color = color;
        }
        Ok(&*pillar)
    }

    /// Applies a partial task update.
    pub fn update_task(&mut self, id: TaskId, update: TaskUpdate) -> Result<&Task, ChartEditError> {
        if let Some(title) = update.title.as_deref() {
            if title.trim().is_empty() {
                return Err(ChartValidationError::BlankTaskTitle(id).into());
            }
        }
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(ChartEditError::TaskNotFound(id))?;

        if let Some(title) = update.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = update.description {
            task.description = description;
        }
        if let Some(status) = update.status {
            task.status = status;
        }
        if let Some(frequency) = update.frequency {
            task.frequency = frequency;
        }
        Ok(&*task)
    }

    /// Creates a task in an empty slot of a present pillar.
    pub fn create_task_at_slot(
        &mut self,
        pillar_position: RingPosition,
        position: RingPosition,
        new_task: NewTask,
    ) -> Result<TaskId, ChartEditError> {
        let pillar_id = self
            .pillar_at(pillar_position)
            .map(|pillar| pillar.id)
            .ok_or(ChartEditError::PillarVacant(pillar_position))?;
        if self.task_at(pillar_position, position).is_some() {
            return Err(ChartEditError::SlotOccupied {
                pillar_position,
                position,
            });
        }

        let title = new_task.title.trim();
        if title.is_empty() {
            return Err(ChartEditError::BlankSlotTitle {
                pillar_position,
                position,
            });
        }

        let mut task = Task::new(pillar_id, position, title);
        task.description = new_task.description;
        task.status = new_task.status;
        task.frequency = new_task.frequency;

        let id = task.id;
        self.tasks.push(task);
        Ok(id)
    }
}

/// Parses a `YYYY-MM-DD` calendar date.
///
/// Only the zero-padded ASCII form is accepted; chrono alone would also take
/// unpadded months and days.
pub fn parse_target_date(value: &str) -> Result<NaiveDate, TargetDateError> {
    let date = NaiveDate::parse_from_str(value, TARGET_DATE_FORMAT).map_err(|err| {
        match err.kind() {
            ParseErrorKind::OutOfRange | ParseErrorKind::Impossible => {
                TargetDateError::NotACalendarDate(value.to_string())
            }
            _ => TargetDateError::Malformed(value.to_string()),
        }
    })?;
    if date.format(TARGET_DATE_FORMAT).to_string() != value {
        return Err(TargetDateError::Malformed(value.to_string()));
    }
    Ok(date)
}

/// Target date validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetDateError {
    Malformed(String),
    NotACalendarDate(String),
}

impl Display for TargetDateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(value) => {
                write!(f, "target date must be YYYY-MM-DD, got `{value}`")
            }
            Self::NotACalendarDate(value) => write!(f, "target date `{value}` does not exist"),
        }
    }
}

impl Error for TargetDateError {}

/// Chart invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartValidationError {
    TargetDate(TargetDateError),
    BlankPillarName(PillarId),
    BlankTaskTitle(TaskId),
    DuplicatePillarId(PillarId),
    DuplicatePillarPosition(RingPosition),
    DuplicateTaskId(TaskId),
    DuplicateTaskPosition {
        pillar_id: PillarId,
        position: RingPosition,
    },
    UnknownPillar {
        task_id: TaskId,
        pillar_id: PillarId,
    },
}

impl Display for ChartValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TargetDate(err) => write!(f, "{err}"),
            Self::BlankPillarName(id) => write!(f, "pillar name must not be blank: {id}"),
            Self::BlankTaskTitle(id) => write!(f, "task title must not be blank: {id}"),
            Self::DuplicatePillarId(id) => write!(f, "duplicate pillar id: {id}"),
            Self::DuplicatePillarPosition(position) => {
                write!(f, "more than one pillar at position {position}")
            }
            Self::DuplicateTaskId(id) => write!(f, "duplicate task id: {id}"),
            Self::DuplicateTaskPosition {
                pillar_id,
                position,
            } => write!(
                f,
                "more than one task at position {position} of pillar {pillar_id}"
            ),
            Self::UnknownPillar { task_id, pillar_id } => write!(
                f,
                "task {task_id} references pillar {pillar_id} which is not part of the chart"
            ),
        }
    }
}

impl Error for ChartValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::TargetDate(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TargetDateError> for ChartValidationError {
    fn from(value: TargetDateError) -> Self {
        Self::TargetDate(value)
    }
}

/// Errors from chart edit operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartEditError {
    Validation(ChartValidationError),
    PillarNotFound(PillarId),
    TaskNotFound(TaskId),
    /// No pillar exists at the requested position.
    PillarVacant(RingPosition),
    /// A task already exists at the requested slot.
    SlotOccupied {
        pillar_position: RingPosition,
        position: RingPosition,
    },
    /// A task for an empty slot was submitted without a title.
    BlankSlotTitle {
        pillar_position: RingPosition,
        position: RingPosition,
    },
}

impl Display for ChartEditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::PillarNotFound(id) => write!(f, "pillar not found: {id}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::PillarVacant(position) => write!(f, "no pillar at position {position}"),
            Self::SlotOccupied {
                pillar_position,
                position,
            } => write!(
                f,
                "task slot {position} of pillar {pillar_position} is already occupied"
            ),
            Self::BlankSlotTitle {
                pillar_position,
                position,
            } => write!(
                f,
                "task title for slot {position} of pillar {pillar_position} must not be blank"
            ),
        }
    }
}

impl Error for ChartEditError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ChartValidationError> for ChartEditError {
    fn from(value: ChartValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<TargetDateError> for ChartEditError {
    fn from(value: TargetDateError) -> Self {
        Self::Validation(ChartValidationError::TargetDate(value))
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_target_date, TargetDateError};
    use chrono::NaiveDate;

    #[test]
    fn target_date_accepts_leap_day() {
        assert_eq!(
            parse_target_date("2028-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2028, 2, 29).unwrap()
        );
        parse_target_date("2026-12-31").unwrap();
    }

    #[test]
    fn target_date_rejects_impossible_days() {
        assert!(matches!(
            parse_target_date("2026-02-29"),
            Err(TargetDateError::NotACalendarDate(_))
        ));
        assert!(matches!(
            parse_target_date("2026-13-01"),
            Err(TargetDateError::NotACalendarDate(_))
        ));
    }

    #[test]
    fn target_date_rejects_other_formats() {
        for value in ["31/12/2026", "2026-1-5", " 2026-12-31", "2026-12-31T00:00"] {
            assert_eq!(
                parse_target_date(value),
                Err(TargetDateError::Malformed(value.to_string())),
                "{value}"
            );
        }
    }

    #[test]
    fn target_date_requires_ascii_digits() {
        let value = "\u{662}\u{660}\u{662}\u{666}-\u{661}\u{662}-\u{663}\u{661}";
        assert_eq!(
            parse_target_date(value),
            Err(TargetDateError::Malformed(value.to_string()))
        );
    }
}
