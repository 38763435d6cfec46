//! Grid builder: entity collections in, 9x9 cell matrix out.
//!
//! # Responsibility
//! - Place the goal, both copies of every pillar, and every task slot of
//!   present pillars using the constant geometry tables.
//!
//! # Invariants
//! - Pure: no I/O, no logging, no mutation of inputs.
//! - A cell is written at most once; any collision aborts the build.
//! - Either a complete grid or an error is returned, never a partial grid.

use super::cell::{Cell, EmptyTaskCell, GoalCell, PillarCell, TaskCell, CORE_GOAL_TITLE};
use super::geometry::{
    pillar_center_ring, pillar_outer_center, task_coord, GridCoord, CENTER, GRID_SIZE,
};
use crate::model::chart::Chart;
use crate::model::pillar::{Pillar, PillarId};
use crate::model::position::{RingPosition, RING_SIZE};
use crate::model::task::{Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

type Rows = [[Option<Cell>; GRID_SIZE]; GRID_SIZE];

/// Borrowed builder input.
#[derive(Debug, Clone, Copy)]
pub struct GridInput<'a> {
    pub goal: &'a str,
    pub pillars: &'a [Pillar],
    pub tasks: &'a [Task],
}

impl<'a> GridInput<'a> {
    pub fn new(goal: &'a str, pillars: &'a [Pillar], tasks: &'a [Task]) -> Self {
        Self {
            goal,
            pillars,
            tasks,
        }
    }

    pub fn from_chart(chart: &'a Chart) -> Self {
        Self::new(chart.core_goal.as_str(), &chart.pillars, &chart.tasks)
    }
}

/// Built chart layout. Serializes as a 9x9 array of `null` or cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HaradaGrid {
    rows: Rows,
}

impl HaradaGrid {
    fn empty() -> Self {
        Self {
            rows: std::array::from_fn(|_| std::array::from_fn(|_| None)),
        }
    }

    pub fn get(&self, coord: GridCoord) -> Option<&Cell> {
        self.rows
            .get(coord.row_index())?
            .get(coord.col_index())?
            .as_ref()
    }

    /// Bounds-checked lookup by raw row/column.
    pub fn at(&self, row: usize, col: usize) -> Option<&Cell> {
        GridCoord::checked(row, col).and_then(|coord| self.get(coord))
    }

    pub fn rows(&self) -> &[[Option<Cell>; GRID_SIZE]; GRID_SIZE] {
        &self.rows
    }

    /// Hands the cells to a caller that adjusts them while rendering.
    pub fn into_rows(self) -> [[Option<Cell>; GRID_SIZE]; GRID_SIZE] {
        self.rows
    }

    /// Non-empty cells in row-major order.
    pub fn placed_cells(&self) -> impl Iterator<Item = (GridCoord, &Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.as_ref()
                    .map(|cell| (GridCoord::new(row as u8, col as u8), cell))
            })
        })
    }

    pub fn placed_count(&self) -> usize {
        self.placed_cells().count()
    }

    pub fn goal(&self) -> Option<&GoalCell> {
        match self.get(CENTER) {
            Some(Cell::CoreGoal(goal)) => Some(goal),
            _ => None,
        }
    }

    fn place(&mut self, coord: GridCoord, cell: Cell) -> Result<(), GridBuildError> {
        let slot = self
            .rows
            .get_mut(coord.row_index())
            .and_then(|row| row.get_mut(coord.col_index()))
            .ok_or(GridBuildError::CellOutOfRange(coord))?;
        if slot.is_some() {
            return Err(GridBuildError::CellCollision(coord));
        }
        *slot = Some(cell);
        Ok(())
    }
}

/// Builds the full chart layout.
///
/// # Errors
/// - Duplicate pillar id/position, duplicate task slot, or a task whose
///   pillar is absent from `input.pillars`.
/// - Any placement onto an occupied coordinate.
pub fn build_grid(input: &GridInput<'_>) -> Result<HaradaGrid, GridBuildError> {
    let pillars = index_pillars(input.pillars)?;
    let tasks = index_tasks(input.pillars, input.tasks)?;

    let mut grid = HaradaGrid::empty();
    grid.place(
        CENTER,
        Cell::CoreGoal(GoalCell {
            content: input.goal.to_string(),
            title: CORE_GOAL_TITLE.to_string(),
        }),
    )?;

    for (position, pillar) in present(&pillars) {
        let label = pillar_cell(pillar, false);
        let mirror = pillar_cell(pillar, true);
        grid.place(pillar_center_ring(position), Cell::Pillar(label))?;
        grid.place(pillar_outer_center(position), Cell::Pillar(mirror))?;
    }

    for (pillar_position, pillar) in present(&pillars) {
        for task_position in RingPosition::ALL {
            let cell = match tasks[pillar_position.index()][task_position.index()] {
                Some(task) => Cell::Task(TaskCell {
                    id: task.id,
                    title: task.title.clone(),
                    status: task.status,
                    frequency: task.frequency,
                    color: pillar.color,
                    pillar_id: pillar.id,
                    pillar_position,
                    position: task_position,
                }),
                None => Cell::TaskEmpty(EmptyTaskCell {
                    color: pillar.color,
                    pillar_id: pillar.id,
                    pillar_position,
                    position: task_position,
                }),
            };
            grid.place(task_coord(pillar_position, task_position), cell)?;
        }
    }

    Ok(grid)
}

/// Convenience wrapper over [`build_grid`] for a chart aggregate.
pub fn build_chart_grid(chart: &Chart) -> Result<HaradaGrid, GridBuildError> {
    build_grid(&GridInput::from_chart(chart))
}

fn pillar_cell(pillar: &Pillar, mirrored: bool) -> PillarCell {
    PillarCell {
        id: pillar.id,
        name: pillar.name.clone(),
        color: pillar.color,
        position: pillar.position,
        mirrored,
    }
}

fn present<'a>(
    pillars: &'a [Option<&'a Pillar>; RING_SIZE],
) -> impl Iterator<Item = (RingPosition, &'a Pillar)> + 'a {
    RingPosition::ALL
        .into_iter()
        .filter_map(move |position| pillars[position.index()].map(|pillar| (position, pillar)))
}

fn index_pillars(pillars: &[Pillar]) -> Result<[Option<&Pillar>; RING_SIZE], GridBuildError> {
    let mut by_position: [Option<&Pillar>; RING_SIZE] = [None; RING_SIZE];
    let mut seen_ids = HashSet::with_capacity(pillars.len());
    for pillar in pillars {
        if !seen_ids.insert(pillar.id) {
            return Err(GridBuildError::DuplicatePillarId(pillar.id));
        }
        let slot = &mut by_position[pillar.position.index()];
        if slot.is_some() {
            return Err(GridBuildError::DuplicatePillarPosition(pillar.position));
        }
        *slot = Some(pillar);
    }
    Ok(by_position)
}

type TaskIndex<'a> = [[Option<&'a Task>; RING_SIZE]; RING_SIZE];

fn index_tasks<'a>(
    pillars: &[Pillar],
    tasks: &'a [Task],
) -> Result<TaskIndex<'a>, GridBuildError> {
    let pillar_positions: HashMap<PillarId, RingPosition> = pillars
        .iter()
        .map(|pillar| (pillar.id, pillar.position))
        .collect();

    let mut by_slot: TaskIndex<'a> = [[None; RING_SIZE]; RING_SIZE];
    for task in tasks {
        let pillar_position = *pillar_positions.get(&task.pillar_id).ok_or(
            GridBuildError::OrphanTask {
                task_id: task.id,
                pillar_id: task.pillar_id,
            },
        )?;
        let slot = &mut by_slot[pillar_position.index()][task.position.index()];
        if slot.is_some() {
            return Err(GridBuildError::DuplicateTaskPosition {
                pillar_position,
                position: task.position,
            });
        }
        *slot = Some(task);
    }
    Ok(by_slot)
}

/// Grid construction failure. No partial grid accompanies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridBuildError {
    DuplicatePillarPosition(RingPosition),
    DuplicatePillarId(PillarId),
    DuplicateTaskPosition {
        pillar_position: RingPosition,
        position: RingPosition,
    },
    OrphanTask {
        task_id: TaskId,
        pillar_id: PillarId,
    },
    CellCollision(GridCoord),
    CellOutOfRange(GridCoord),
}

impl Display for GridBuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePillarPosition(position) => {
                write!(f, "more than one pillar at position {position}")
            }
            Self::DuplicatePillarId(id) => write!(f, "pillar {id} appears more than once"),
            Self::DuplicateTaskPosition {
                pillar_position,
                position,
            } => write!(
                f,
                "more than one task at position {position} of pillar {pillar_position}"
            ),
            Self::OrphanTask { task_id, pillar_id } => {
                write!(f, "task {task_id} references missing pillar {pillar_id}")
            }
            Self::CellCollision(coord) => write!(f, "grid cell {coord} written twice"),
            Self::CellOutOfRange(coord) => write!(f, "grid cell {coord} is outside the grid"),
        }
    }
}

impl Error for GridBuildError {}
