//! **pathtick-core** — Obstacle grid model for stepwise pathfinding (core types).
//!
//! This crate provides the foundational types used across the *pathtick*
//! workspace: the [`Point`] geometry primitive, search [`Config`]uration,
//! the dense obstacle [`Grid`] with its precomputed neighbor arena, and the
//! shared [`Error`] type.

pub mod config;
pub mod error;
pub mod geom;
pub mod grid;

pub use config::{Config, Connectivity};
pub use error::{Error, Result};
pub use geom::Point;
pub use grid::{Cell, Grid};
