//! 4-connected flood fill over a [`Grid`].
//!
//! The grid doubles as the visited set: a cell is recolored the moment it is visited, so it no longer
//! matches the target color and is never visited again. This only works because the fill refuses to run
//! when the target and replacement colors are equal.

use std::collections::BTreeSet;

use crate::color::Color;
use crate::error::GridResult;
use crate::grid::{Cell, Grid};

/// Recolors the connected region of same-colored cells containing `(start_row, start_col)`.
///
/// Returns the cells that changed, which is empty when the start cell already has `new_color`.
/// Fails with `OutOfBounds` if the start cell is outside the grid.
pub fn flood_fill(
    grid: &mut Grid,
    start_row: usize,
    start_col: usize,
    new_color: &Color,
) -> GridResult<BTreeSet<Cell>> {
    let target = grid.get(start_row, start_col)?.clone();
    let mut changed = BTreeSet::new();

    if target == *new_color {
        return Ok(changed);
    }

    // Explicit work-list; a region can be as large as the whole grid
    let mut stack = vec![Cell::new(start_row, start_col)];

    while let Some(cell) = stack.pop() {
        match grid.color_at(cell) {
            Some(color) if *color == target => {}
            _ => continue,
        }

        grid.set(cell.row, cell.col, new_color.clone())?;
        changed.insert(cell);

        // Below and right may fall outside the grid; the guard above prunes them
        stack.push(Cell::new(cell.row + 1, cell.col));
        stack.push(Cell::new(cell.row, cell.col + 1));
        if let Some(row) = cell.row.checked_sub(1) {
            stack.push(Cell::new(row, cell.col));
        }
        if let Some(col) = cell.col.checked_sub(1) {
            stack.push(Cell::new(cell.row, col));
        }
    }

    log::debug!(
        "Filled {} cells from ({}, {}) with {}",
        changed.len(),
        start_row,
        start_col,
        new_color
    );

    Ok(changed)
}
