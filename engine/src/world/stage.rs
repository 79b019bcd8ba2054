//! Stage Occupancy Grid
//!
//! A stage is a flat, row-major grid of cells: 1 is a solid wall block
//! rendered as a unit cube at `(x, 0, y)`, 0 is open floor. Stages are
//! immutable for the process lifetime; the renderer consumes them through
//! the [`CellLookup`] capability so other grid sources (files, generators)
//! can be substituted without touching the render path.
//!
//! Cell `(x, y)` lives at flat index `y * width + x`.

use serde::Deserialize;
use std::error::Error;
use std::fmt;

/// Errors produced while constructing or loading a stage.
#[derive(Debug)]
pub enum StageError {
    /// `cells.len()` does not equal `width * height`.
    SizeMismatch {
        width: usize,
        height: usize,
        len: usize,
    },
    /// A cell held something other than 0 or 1.
    BadCell { index: usize, value: u8 },
    /// The stage JSON could not be parsed.
    Parse(serde_json::Error),
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { width, height, len } => write!(
                f,
                "stage data has {len} cells, expected {width}x{height} = {}",
                width * height
            ),
            Self::BadCell { index, value } => {
                write!(f, "stage cell {index} holds {value}, expected 0 or 1")
            }
            Self::Parse(err) => write!(f, "could not parse stage JSON: {err}"),
        }
    }
}

impl Error for StageError {}

impl From<serde_json::Error> for StageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Read-only cell occupancy lookup.
///
/// The renderer walks any `CellLookup` in row-major order; [`Stage`] is the
/// in-memory implementation backed by a literal or a JSON document.
pub trait CellLookup {
    /// Grid width in cells.
    fn width(&self) -> usize;
    /// Grid height in cells.
    fn height(&self) -> usize;
    /// Whether cell `(x, y)` is a solid wall block.
    fn is_solid(&self, x: usize, y: usize) -> bool;
}

/// On-disk / on-wire shape of a stage document.
#[derive(Debug, Deserialize)]
struct StageData {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

/// A fixed-size occupancy grid, immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Stage {
    /// Build a stage, validating the cell data against the dimensions.
    pub fn new(width: usize, height: usize, cells: Vec<u8>) -> Result<Self, StageError> {
        if cells.len() != width * height {
            return Err(StageError::SizeMismatch {
                width,
                height,
                len: cells.len(),
            });
        }
        if let Some((index, &value)) = cells.iter().enumerate().find(|&(_, &c)| c > 1) {
            return Err(StageError::BadCell { index, value });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Load a stage from a JSON document of the form
    /// `{"width": W, "height": H, "cells": [...]}`.
    pub fn from_json(json: &str) -> Result<Self, StageError> {
        let data: StageData = serde_json::from_str(json)?;
        Self::new(data.width, data.height, data.cells)
    }

    /// The hand-authored 10x10 demo stage.
    ///
    /// 86 of the 100 cells are solid; the open pocket around `(2, 2)` is the
    /// spawn area.
    pub fn demo() -> Self {
        #[rustfmt::skip]
        let cells = vec![
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 0, 0, 1, 0, 1, 1, 1, 1, 1,
            1, 0, 0, 1, 0, 1, 1, 1, 1, 1,
            1, 1, 0, 0, 0, 1, 1, 1, 1, 1,
            1, 1, 0, 0, 0, 1, 1, 1, 1, 1,
            1, 1, 1, 0, 0, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
        ];
        Self::new(10, 10, cells).expect("demo stage literal is valid")
    }

    /// Flat index of cell `(x, y)`.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Cell coordinates of flat index `i`.
    #[inline]
    pub fn coords(&self, i: usize) -> (usize, usize) {
        (i % self.width, i / self.width)
    }

    /// Raw cell value at `(x, y)`.
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> u8 {
        self.cells[self.index(x, y)]
    }

    /// Number of solid cells, which is also the per-frame draw count.
    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    /// Row-major iterator over the coordinates of solid cells.
    pub fn solid_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == 1)
            .map(|(i, _)| self.coords(i))
    }

    /// Total number of cells (solid or not).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

impl CellLookup for Stage {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn is_solid(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)] == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let stage = Stage::new(2, 3, vec![1, 0, 0, 1, 1, 0]).unwrap();
        assert_eq!(stage.width(), 2);
        assert_eq!(stage.height(), 3);
        assert_eq!(stage.solid_count(), 3);
    }

    #[test]
    fn test_new_size_mismatch() {
        let err = Stage::new(3, 3, vec![1, 0, 1]).unwrap_err();
        assert!(matches!(err, StageError::SizeMismatch { len: 3, .. }));
    }

    #[test]
    fn test_new_bad_cell() {
        let err = Stage::new(2, 1, vec![1, 7]).unwrap_err();
        assert!(matches!(err, StageError::BadCell { index: 1, value: 7 }));
    }

    #[test]
    fn test_index_coords_round_trip() {
        let stage = Stage::demo();
        for i in 0..stage.cell_count() {
            let (x, y) = stage.coords(i);
            assert_eq!(stage.index(x, y), i);
        }
    }

    #[test]
    fn test_index_formula() {
        let stage = Stage::new(4, 2, vec![0; 8]).unwrap();
        assert_eq!(stage.index(3, 1), 7);
        assert_eq!(stage.coords(5), (1, 1));
    }

    #[test]
    fn test_demo_stage_shape() {
        let stage = Stage::demo();
        assert_eq!(stage.width(), 10);
        assert_eq!(stage.height(), 10);
        assert_eq!(stage.solid_count(), 86);
        // Count matches the literal: rows of 10/7/7/7/7/8 then four full rows.
        let by_row: usize = [10, 7, 7, 7, 7, 8, 10, 10, 10, 10].iter().sum();
        assert_eq!(stage.solid_count(), by_row);
        // Spawn cell is open.
        assert!(!stage.is_solid(2, 2));
        assert_eq!(stage.cell(2, 2), 0);
        assert_eq!(stage.cell(0, 0), 1);
        // Border is sealed.
        for x in 0..10 {
            assert!(stage.is_solid(x, 0));
            assert!(stage.is_solid(x, 9));
        }
        for y in 0..10 {
            assert!(stage.is_solid(0, y));
            assert!(stage.is_solid(9, y));
        }
    }

    #[test]
    fn test_solid_cells_row_major() {
        let stage = Stage::new(3, 2, vec![0, 1, 0, 1, 0, 1]).unwrap();
        let cells: Vec<_> = stage.solid_cells().collect();
        assert_eq!(cells, vec![(1, 0), (0, 1), (2, 1)]);
    }

    #[test]
    fn test_from_json() {
        let stage = Stage::from_json(r#"{"width": 2, "height": 2, "cells": [1, 0, 0, 1]}"#)
            .unwrap();
        assert_eq!(stage.solid_count(), 2);
        assert!(stage.is_solid(0, 0));
        assert!(!stage.is_solid(1, 0));
    }

    #[test]
    fn test_from_json_rejects_wrong_len() {
        let err = Stage::from_json(r#"{"width": 2, "height": 2, "cells": [1, 0]}"#).unwrap_err();
        assert!(matches!(err, StageError::SizeMismatch { .. }));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = Stage::from_json("not json").unwrap_err();
        assert!(matches!(err, StageError::Parse(_)));
    }
}
