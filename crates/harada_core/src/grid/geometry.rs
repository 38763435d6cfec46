//! Fixed 9x9 chart geometry.
//!
//! # Responsibility
//! - Own the constant coordinate tables used for placement.
//! - Map any coordinate back to the entity slot it represents.
//!
//! # Invariants
//! - Tables are compile-time constants derived from `CENTER` and
//!   `RING_OFFSETS`; nothing recomputes them at runtime.
//! - `CENTER`, `PILLAR_CENTER_RING`, `PILLAR_OUTER_CENTER` and `TASK_SLOTS`
//!   are pairwise disjoint and together cover all 81 cells.
//!
//! Block layout (pillar positions), with the goal block in the middle:
//!
//! ```text
//! 1 2 3
//! 8 G 4
//! 7 6 5
//! ```

use crate::model::position::{RingPosition, RING_SIZE};
use std::fmt::{Display, Formatter};

/// Side length of the chart grid.
pub const GRID_SIZE: usize = 9;

/// Side length of one block.
pub const BLOCK_SIZE: usize = 3;

/// 0-based `(row, col)` cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridCoord {
    pub row: u8,
    pub col: u8,
}

impl GridCoord {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Builds a coordinate if both axes are within the grid.
    pub fn checked(row: usize, col: usize) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Applies a `(dr, dc)` offset, returning `None` when leaving the grid.
    pub fn offset(self, (dr, dc): (i8, i8)) -> Option<Self> {
        let row = i16::from(self.row) + i16::from(dr);
        let col = i16::from(self.col) + i16::from(dc);
        if row < 0 || col < 0 {
            return None;
        }
        Self::checked(row as usize, col as usize)
    }

    pub fn row_index(self) -> usize {
        usize::from(self.row)
    }

    pub fn col_index(self) -> usize {
        usize::from(self.col)
    }

    const fn scaled(self, (dr, dc): (i8, i8), scale: i8) -> Self {
        Self::new(
            (self.row as i8 + dr * scale) as u8,
            (self.col as i8 + dc * scale) as u8,
        )
    }
}

impl Display for GridCoord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Exact center of the grid; always holds the goal cell.
pub const CENTER: GridCoord = GridCoord::new(4, 4);

/// `(dr, dc)` from a block center to each ring position, indexed by
/// `RingPosition::index()`.
pub const RING_OFFSETS: [(i8, i8); RING_SIZE] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Pillar label cells inside the center block: `CENTER + RING_OFFSETS[p]`.
pub const PILLAR_CENTER_RING: [GridCoord; RING_SIZE] = scaled_ring(CENTER, 1);

/// Mirrored pillar cells at each outer block center: `CENTER + 3 * RING_OFFSETS[p]`.
pub const PILLAR_OUTER_CENTER: [GridCoord; RING_SIZE] = scaled_ring(CENTER, BLOCK_SIZE as i8);

/// Task cells: `TASK_SLOTS[pillar][task] = PILLAR_OUTER_CENTER[pillar] + RING_OFFSETS[task]`.
pub const TASK_SLOTS: [[GridCoord; RING_SIZE]; RING_SIZE] = task_slots();

const fn scaled_ring(center: GridCoord, scale: i8) -> [GridCoord; RING_SIZE] {
    let mut ring = [center; RING_SIZE];
    let mut index = 0;
    while index < RING_SIZE {
        ring[index] = center.scaled(RING_OFFSETS[index], scale);
        index += 1;
    }
    ring
}

const fn task_slots() -> [[GridCoord; RING_SIZE]; RING_SIZE] {
    let mut slots = [[CENTER; RING_SIZE]; RING_SIZE];
    let mut pillar = 0;
    while pillar < RING_SIZE {
        slots[pillar] = scaled_ring(PILLAR_OUTER_CENTER[pillar], 1);
        pillar += 1;
    }
    slots
}

pub fn ring_offset(position: RingPosition) -> (i8, i8) {
    RING_OFFSETS[position.index()]
}

pub fn pillar_center_ring(position: RingPosition) -> GridCoord {
    PILLAR_CENTER_RING[position.index()]
}

pub fn pillar_outer_center(position: RingPosition) -> GridCoord {
    PILLAR_OUTER_CENTER[position.index()]
}

pub fn task_coord(pillar: RingPosition, task: RingPosition) -> GridCoord {
    TASK_SLOTS[pillar.index()][task.index()]
}

/// What a grid coordinate is reserved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridSlot {
    Goal,
    /// Pillar label in the center block.
    PillarLabel(RingPosition),
    /// Pillar copy at the center of its outer block.
    PillarMirror(RingPosition),
    Task {
        pillar: RingPosition,
        task: RingPosition,
    },
}

/// Classifies a coordinate; `None` when outside the grid.
pub fn slot_at(coord: GridCoord) -> Option<GridSlot> {
    let (row, col) = (coord.row_index(), coord.col_index());
    if row >= GRID_SIZE || col >= GRID_SIZE {
        return None;
    }

    let block = block_offset(row / BLOCK_SIZE, col / BLOCK_SIZE);
    let inner = block_offset(row % BLOCK_SIZE, col % BLOCK_SIZE);
    let slot = match (ring_position_at(block), ring_position_at(inner)) {
        (None, None) => GridSlot::Goal,
        (None, Some(pillar)) => GridSlot::PillarLabel(pillar),
        (Some(pillar), None) => GridSlot::PillarMirror(pillar),
        (Some(pillar), Some(task)) => GridSlot::Task { pillar, task },
    };
    Some(slot)
}

fn block_offset(row: usize, col: usize) -> (i8, i8) {
    (row as i8 - 1, col as i8 - 1)
}

fn ring_position_at(offset: (i8, i8)) -> Option<RingPosition> {
    RING_OFFSETS
        .iter()
        .position(|candidate| *candidate == offset)
        .and_then(RingPosition::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pos(value: u8) -> RingPosition {
        RingPosition::new(value).unwrap()
    }

    #[test]
    fn center_ring_matches_compass_layout() {
        let expected = [
            (3, 3),
            (3, 4),
            (3, 5),
            (4, 5),
            (5, 5),
            (5, 4),
            (5, 3),
            (4, 3),
        ];
        for (index, (row, col)) in expected.into_iter().enumerate() {
            assert_eq!(PILLAR_CENTER_RING[index], GridCoord::new(row, col));
        }
    }

    #[test]
    fn outer_centers_match_compass_layout() {
        let expected = [
            (1, 1),
            (1, 4),
            (1, 7),
            (4, 7),
            (7, 7),
            (7, 4),
            (7, 1),
            (4, 1),
        ];
        for (index, (row, col)) in expected.into_iter().enumerate() {
            assert_eq!(PILLAR_OUTER_CENTER[index], GridCoord::new(row, col));
        }
    }

    #[test]
    fn task_slots_follow_ring_offsets() {
        for pillar in RingPosition::ALL {
            for task in RingPosition::ALL {
                let expected = pillar_outer_center(pillar).offset(ring_offset(task));
                assert_eq!(Some(task_coord(pillar, task)), expected);
            }
        }
        assert_eq!(task_coord(pos(1), pos(1)), GridCoord::new(0, 0));
        assert_eq!(task_coord(pos(5), pos(5)), GridCoord::new(8, 8));
        assert_eq!(task_coord(pos(4), pos(8)), GridCoord::new(4, 6));
    }

    #[test]
    fn tables_are_disjoint_and_cover_grid() {
        let mut seen = HashSet::new();
        assert!(seen.insert(CENTER));
        for coord in PILLAR_CENTER_RING.iter().chain(PILLAR_OUTER_CENTER.iter()) {
            assert!(seen.insert(*coord), "duplicate pillar coordinate {coord}");
        }
        for row in TASK_SLOTS.iter() {
            for coord in row {
                assert!(seen.insert(*coord), "duplicate task coordinate {coord}");
            }
        }
        assert_eq!(seen.len(), GRID_SIZE * GRID_SIZE);
    }

    #[test]
    fn slot_at_inverts_every_table() {
        assert_eq!(slot_at(CENTER), Some(GridSlot::Goal));
        for pillar in RingPosition::ALL {
            assert_eq!(
                slot_at(pillar_center_ring(pillar)),
                Some(GridSlot::PillarLabel(pillar))
            );
            assert_eq!(
                slot_at(pillar_outer_center(pillar)),
                Some(GridSlot::PillarMirror(pillar))
            );
            for task in RingPosition::ALL {
                assert_eq!(
                    slot_at(task_coord(pillar, task)),
                    Some(GridSlot::Task { pillar, task })
                );
            }
        }
        assert_eq!(slot_at(GridCoord::new(9, 0)), None);
    }

    #[test]
    fn offset_rejects_leaving_the_grid() {
        assert_eq!(GridCoord::new(0, 0).offset((-1, 0)), None);
        assert_eq!(GridCoord::new(8, 8).offset((0, 1)), None);
        assert_eq!(
            GridCoord::new(1, 1).offset((-1, -1)),
            Some(GridCoord::new(0, 0))
        );
    }
}
