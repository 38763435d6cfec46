//! Grid rendering use-case.
//!
//! # Responsibility
//! - Validate a chart, build its grid, and report the outcome in logs.
//! - Summarize a built grid for callers that only need counts.
//!
//! # Invariants
//! - Logs carry counts and ids only, never goal/pillar/task text.
//! - A chart that fails validation never reaches the builder.

use crate::grid::builder::{build_grid, GridBuildError, GridInput, HaradaGrid};
use crate::grid::cell::CellKind;
use crate::model::chart::{Chart, ChartValidationError};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Error from [`render_chart_grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    InvalidChart(ChartValidationError),
    Build(GridBuildError),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidChart(err) => write!(f, "invalid chart: {err}"),
            Self::Build(err) => write!(f, "grid build failed: {err}"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidChart(err) => Some(err),
            Self::Build(err) => Some(err),
        }
    }
}

impl From<ChartValidationError> for RenderError {
    fn from(value: ChartValidationError) -> Self {
        Self::InvalidChart(value)
    }
}

impl From<GridBuildError> for RenderError {
    fn from(value: GridBuildError) -> Self {
        Self::Build(value)
    }
}

/// Counts derived from a chart and its built grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSummary {
    pub pillar_count: usize,
    pub task_count: usize,
    pub empty_slot_count: usize,
    pub placed_cells: usize,
    pub completion_percentage: u8,
}

impl GridSummary {
    pub fn of(chart: &Chart, grid: &HaradaGrid) -> Self {
        let mut task_count = 0;
        let mut empty_slot_count = 0;
        for (_, cell) in grid.placed_cells() {
            match cell.kind() {
                CellKind::Task => task_count += 1,
                CellKind::TaskEmpty => empty_slot_count += 1,
                CellKind::CoreGoal | CellKind::Pillar => {}
            }
        }
        Self {
            pillar_count: chart.pillars.len(),
            task_count,
            empty_slot_count,
            placed_cells: grid.placed_count(),
            completion_percentage: chart.completion_percentage(),
        }
    }
}

/// Validates `chart` and builds its grid.
///
/// # Side effects
/// - Emits `grid_render` log events with duration and status.
pub fn render_chart_grid(chart: &Chart) -> Result<HaradaGrid, RenderError> {
    let started_at = Instant::now();

    if let Err(err) = chart.validate() {
        warn!(
            "event=grid_render module=grid status=error chart_id={} error_code=invalid_chart error={}",
            chart.id, err
        );
        return Err(err.into());
    }

    match build_grid(&GridInput::from_chart(chart)) {
        Ok(grid) => {
            debug!(
                "event=grid_render module=grid status=ok chart_id={} pillars={} tasks={} placed={} duration_us={}",
                chart.id,
                chart.pillars.len(),
                chart.tasks.len(),
                grid.placed_count(),
                started_at.elapsed().as_micros()
            );
            Ok(grid)
        }
        Err(err) => {
            warn!(
                "event=grid_render module=grid status=error chart_id={} error_code=grid_build_failed error={}",
                chart.id, err
            );
            Err(err.into())
        }
    }
}
