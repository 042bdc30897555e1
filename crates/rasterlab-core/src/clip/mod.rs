//! Line clipping against a rectangular window.
//!
//! Clipping never removes cells from a line. It recomputes the visible
//! extent of the segment and hides the cells outside it.

mod cohen_sutherland;
mod liang_barsky;

pub use cohen_sutherland::cohen_sutherland;
pub use liang_barsky::liang_barsky;

use crate::grid::Cell;
use crate::shapes::{Line, ShapeTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Endpoint committed when a segment lies entirely outside the window.
///
/// No cell with non-negative coordinates falls between two copies of it,
/// so committing it hides the whole line.
pub const SENTINEL: Point = Point::new(-1.0, -1.0);

/// Axis-aligned clipping window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    rect: Rect,
}

impl Window {
    /// Build a window from two opposite corners, in any order.
    pub fn new(lower: Point, upper: Point) -> Self {
        Self {
            rect: Rect::from_points(lower, upper),
        }
    }

    /// Corner with the smallest coordinates.
    pub fn lower(&self) -> Point {
        self.rect.origin()
    }

    /// Corner with the largest coordinates.
    pub fn upper(&self) -> Point {
        Point::new(self.rect.x1, self.rect.y1)
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.rect.x0 && point.x <= self.rect.x1 && point.y >= self.rect.y0 && point.y <= self.rect.y1
    }
}

/// Line clipping algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipAlgorithm {
    /// Region codes.
    #[default]
    CohenSutherland,
    /// Parametric.
    LiangBarsky,
}

impl ClipAlgorithm {
    /// Clip the segment `start -> end`; `None` when nothing of it is inside.
    pub fn clip_segment(self, start: Point, end: Point, window: &Window) -> Option<(Point, Point)> {
        match self {
            ClipAlgorithm::CohenSutherland => cohen_sutherland(start, end, window),
            ClipAlgorithm::LiangBarsky => liang_barsky(start, end, window),
        }
    }

    /// Clip a rasterized line, hiding the cells outside the window.
    ///
    /// The segment is taken from the first and last cell of the line. Returns
    /// the committed endpoints, `None` when the line was clipped away.
    pub fn clip(self, line: &mut Line, window: &Window) -> Option<(Point, Point)> {
        let (Some(first), Some(last)) = (line.start(), line.end()) else {
            return None;
        };
        let start = Point::new(first.x as f64, first.y as f64);
        let end = Point::new(last.x as f64, last.y as f64);

        let clipped = self
            .clip_segment(start, end, window)
            .map(|(a, b)| (a.round(), b.round()));
        let (a, b) = clipped.unwrap_or((SENTINEL, SENTINEL));
        commit(line.cells_mut(), a, b);

        log::debug!(
            "{:?} on '{}': {}",
            self,
            line.name(),
            match clipped {
                Some((a, b)) => format!("visible from ({}, {}) to ({}, {})", a.x, a.y, b.x, b.y),
                None => "fully clipped".to_string(),
            }
        );
        clipped
    }
}

/// Hide every cell outside the rectangle spanned by `start` and `end`.
///
/// The comparison direction on each axis follows the sign of that axis'
/// delta, so the endpoints may come in either order. Cells inside are left
/// untouched.
pub fn commit(cells: &mut [Cell], start: Point, end: Point) {
    let (dx, dy) = (end.x - start.x, end.y - start.y);
    for cell in cells.iter_mut() {
        let inside = between(cell.x as f64, start.x, end.x, dx) && between(cell.y as f64, start.y, end.y, dy);
        if !inside {
            cell.visible = false;
        }
    }
}

fn between(value: f64, from: f64, to: f64, delta: f64) -> bool {
    if delta >= 0.0 {
        value >= from && value <= to
    } else {
        value <= from && value >= to
    }
}
