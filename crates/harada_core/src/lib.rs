//! Core domain logic for Harada Method charts.
//! This crate is the single source of truth for chart layout invariants.

pub mod grid;
pub mod logging;
pub mod model;
pub mod service;

pub use grid::builder::{build_chart_grid, build_grid, GridBuildError, GridInput, HaradaGrid};
pub use grid::cell::{
    truncate_for_display, Cell, CellKind, EmptyTaskCell, GoalCell, PillarCell, TaskCell,
    CORE_GOAL_TITLE, DEFAULT_DISPLAY_CHARS,
};
pub use grid::geometry::{
    pillar_center_ring, pillar_outer_center, ring_offset, slot_at, task_coord, GridCoord,
    GridSlot, CENTER, GRID_SIZE, PILLAR_CENTER_RING, PILLAR_OUTER_CENTER, RING_OFFSETS,
};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::chart::{
    parse_target_date, Chart, ChartEditError, ChartId, ChartValidationError, GoalDraft, NewTask,
    Perspectives, PillarUpdate, TargetDateError, TaskUpdate,
};
pub use model::pillar::{Pillar, PillarColor, PillarId};
pub use model::position::{PositionError, RingPosition};
pub use model::task::{completion_percentage, Task, TaskFrequency, TaskId, TaskStatus};
pub use model::ParseVariantError;
pub use service::grid_service::{render_chart_grid, GridSummary, RenderError};

/// Minimal health-check API for CLI smoke runs.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
