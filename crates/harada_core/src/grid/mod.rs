//! Harada chart grid: geometry tables, cell descriptors, and the builder.
//!
//! # Responsibility
//! - Turn a goal, its pillars and their tasks into a 9x9 layout.
//!
//! # Invariants
//! - The grid is never patched; it is rebuilt from entities on every call.
//! - Building twice from identical input yields identical grids.

pub mod builder;
pub mod cell;
pub mod geometry;
