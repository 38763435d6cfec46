//! Compact text map of a built grid.
//!
//! Legend: `G` goal, `P` pillar label, `M` mirrored pillar, `T` task,
//! `+` empty task slot, `.` vacant cell. Blocks are separated by spaces.

use harada_core::{truncate_for_display, Cell, Chart, HaradaGrid, DEFAULT_DISPLAY_CHARS};

fn symbol(cell: Option<&Cell>) -> char {
    match cell {
        None => '.',
        Some(Cell::CoreGoal(_)) => 'G',
        Some(Cell::Pillar(pillar)) if pillar.mirrored => 'M',
        Some(Cell::Pillar(_)) => 'P',
        Some(Cell::Task(_)) => 'T',
        Some(Cell::TaskEmpty(_)) => '+',
    }
}

/// Nine newline-terminated lines of eleven characters each.
pub fn kind_map(grid: &HaradaGrid) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        for (col, cell) in row.iter().enumerate() {
            if col > 0 && col % 3 == 0 {
                out.push(' ');
            }
            out.push(symbol(cell.as_ref()));
        }
        out.push('\n');
    }
    out
}

/// Goal headline, shortened like the chart list view.
pub fn goal_line(chart: &Chart) -> String {
    format!(
        "goal: {}",
        truncate_for_display(&chart.core_goal, DEFAULT_DISPLAY_CHARS)
    )
}
