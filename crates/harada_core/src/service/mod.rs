//! Chart use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and grid building for callers.
//! - Keep logging out of the pure grid builder.

pub mod grid_service;
