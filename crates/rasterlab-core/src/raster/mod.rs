//! Rasterizers for lines and circles.
//!
//! Every rasterizer reads the target cell from the grid, tags it with the
//! given [`ShapeContext`](crate::context::ShapeContext), writes it back and
//! keeps a copy in the returned shape.

mod circle;
mod line;

pub use circle::midpoint_circle;
pub use line::{bresenham, dda};

use crate::context::ShapeContext;
use crate::error::RasterResult;
use crate::grid::{Cell, Grid};
use crate::shapes::Line;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Line rasterization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineAlgorithm {
    /// Incremental delta (DDA).
    Dda,
    /// Midpoint decision (Bresenham).
    #[default]
    Bresenham,
}

impl LineAlgorithm {
    pub fn rasterize(
        self,
        start: Point,
        end: Point,
        grid: &mut Grid,
        context: &ShapeContext,
    ) -> RasterResult<Line> {
        match self {
            LineAlgorithm::Dda => dda(start, end, grid, context),
            LineAlgorithm::Bresenham => bresenham(start, end, grid, context),
        }
    }
}

/// Tag the grid cell at `(x, y)` and return a copy of it.
fn take_cell(grid: &mut Grid, x: i32, y: i32, context: &ShapeContext) -> Option<Cell> {
    let cell = grid.get_mut(x, y)?;
    cell.tag(context);
    Some(cell.clone())
}
