//! World Module
//!
//! Contains the stage occupancy grid: a fixed-size, row-major array of
//! cells where value 1 is a solid wall block and 0 is walkable space.

pub mod stage;

pub use stage::{CellLookup, Stage, StageError};
