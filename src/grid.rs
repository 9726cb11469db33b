use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{GridError, GridResult};
use crate::state::Snapshot;

/// Address of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A cell that now holds a different color, handed to the render side as a repaint hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellChange {
    pub cell: Cell,
    pub color: Color,
}

/// Square grid of colored cells, stored row-major.
///
/// The dimension is fixed at construction. Every mutation either returns what changed or fails before
/// touching any cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dimension: usize,
    cells: Vec<Color>,
}

impl Grid {
    /// Creates a `dimension` x `dimension` grid with every cell set to `background`
    pub fn new(dimension: usize, background: Color) -> GridResult<Self> {
        if dimension == 0 {
            return Err(GridError::InvalidDimension);
        }
        let len = dimension
            .checked_mul(dimension)
            .ok_or(GridError::InvalidDimension)?;

        Ok(Self {
            dimension,
            cells: vec![background; len],
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of cells, i.e. `dimension²`
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.dimension && cell.col < self.dimension
    }

    fn index(&self, row: usize, col: usize) -> GridResult<usize> {
        if row >= self.dimension || col >= self.dimension {
            return Err(GridError::OutOfBounds {
                row,
                col,
                dimension: self.dimension,
            });
        }
        Ok(row * self.dimension + col)
    }

    pub fn get(&self, row: usize, col: usize) -> GridResult<&Color> {
        let index = self.index(row, col)?;
        Ok(&self.cells[index])
    }

    /// Non-failing lookup, `None` outside the grid
    pub fn color_at(&self, cell: Cell) -> Option<&Color> {
        self.contains(cell)
            .then(|| &self.cells[cell.row * self.dimension + cell.col])
    }

    /// Overwrites one cell.
    ///
    /// Returns the change when the cell previously held a different color, `None` if it already matched.
    /// Palette membership is the caller's responsibility.
    pub fn set(&mut self, row: usize, col: usize, color: Color) -> GridResult<Option<CellChange>> {
        let index = self.index(row, col)?;
        if self.cells[index] == color {
            return Ok(None);
        }
        self.cells[index] = color.clone();
        Ok(Some(CellChange {
            cell: Cell::new(row, col),
            color,
        }))
    }

    /// Sets every cell to `background`, returning how many cells actually changed
    pub fn clear(&mut self, background: &Color) -> usize {
        let mut changed = 0;
        for cell in self.cells.iter_mut().filter(|c| **c != *background) {
            *cell = background.clone();
            changed += 1;
        }
        changed
    }

    /// Swaps in the snapshot's cells wholesale. Nothing changes unless the whole snapshot is valid.
    pub fn replace_all(&mut self, snapshot: Snapshot) -> GridResult<()> {
        if snapshot.dimension != self.dimension {
            return Err(GridError::DimensionMismatch {
                expected: self.dimension,
                found: snapshot.dimension,
            });
        }
        if snapshot.cells.len() != self.cells.len() {
            return Err(GridError::CorruptSnapshot(format!(
                "expected {} cells, found {}",
                self.cells.len(),
                snapshot.cells.len()
            )));
        }

        self.cells = snapshot.cells;
        Ok(())
    }

    /// Row-major copy of every cell color
    pub fn to_cells(&self) -> Vec<Color> {
        self.cells.clone()
    }

    /// Every cell with its color, row-major
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &Color)> {
        let dimension = self.dimension;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, color)| (Cell::new(i / dimension, i % dimension), color))
    }
}
