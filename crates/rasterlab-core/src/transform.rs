//! Transform engine: relocates a shape's cells on the grid.

use crate::error::RasterResult;
use crate::grid::{Cell, Grid};
use crate::matrix::Matrix;
use crate::shapes::ShapeTrait;
use serde::{Deserialize, Serialize};

/// How transformed coordinates are turned back into grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransformMode {
    /// Round to the nearest cell, half away from zero (translate, rotate, scale).
    #[default]
    Snap,
    /// Mirror with wrap-around onto the opposite edge, no rounding.
    Reflect,
}

/// Apply `matrix` to every cell of `shape`, moving the cells on `grid`.
///
/// All old positions are cleared before any cell is written, so cells of the
/// same shape never erase each other. Cells landing outside the grid are
/// removed from the shape.
pub fn apply<S: ShapeTrait + ?Sized>(
    matrix: &Matrix,
    mode: TransformMode,
    shape: &mut S,
    grid: &mut Grid,
) -> RasterResult<()> {
    for cell in shape.cells() {
        grid.clear_cell(cell.x, cell.y);
    }

    let before = shape.cells().len();
    let cells = shape.cells_mut();
    let mut i = 0;
    while i < cells.len() {
        let (x, y) = matrix.apply(cells[i].x as f64, cells[i].y as f64)?;
        let Some((nx, ny)) = locate(matrix, mode, x, y, grid) else {
            log::trace!("cell ({}, {}) left the grid at ({x}, {y})", cells[i].x, cells[i].y);
            cells.remove(i);
            continue;
        };
        let cell: &mut Cell = &mut cells[i];
        cell.x = nx;
        cell.y = ny;
        grid.put(cell);
        i += 1;
    }

    log::debug!(
        "{:?} transform on '{}': {} cells kept, {} dropped",
        mode,
        shape.name(),
        shape.cells().len(),
        before - shape.cells().len()
    );
    Ok(())
}

/// Map a transformed point to a grid position, `None` when it falls off the grid.
fn locate(matrix: &Matrix, mode: TransformMode, x: f64, y: f64, grid: &Grid) -> Option<(i32, i32)> {
    let (x, y) = match mode {
        TransformMode::Snap => (x.round(), y.round()),
        TransformMode::Reflect => {
            let x = wrap(x, matrix.entry(0, 0), grid.width());
            let y = wrap(y, matrix.entry(1, 1), grid.height());
            // Mirror coefficients are ±1; anything else cannot land on a cell.
            if x.fract() != 0.0 || y.fract() != 0.0 {
                return None;
            }
            (x, y)
        }
    };
    grid.contains_f64(x, y).then_some((x as i32, y as i32))
}

/// Reflection wrap rule: a negative coordinate is shifted by `dimension - 1`,
/// and a zero on a mirrored axis becomes `dimension - 1`.
fn wrap(value: f64, diagonal: f64, dimension: usize) -> f64 {
    let last = (dimension - 1) as f64;
    if value < 0.0 {
        value + last
    } else if value == 0.0 && diagonal < 0.0 {
        last
    } else {
        value
    }
}
