//! Midpoint circle rasterizer.

use super::take_cell;
use crate::context::ShapeContext;
use crate::grid::Grid;
use crate::shapes::Circle;
use kurbo::Point;

/// Rasterize a circle with the midpoint algorithm.
///
/// One octant is walked from `(0, radius)` until `x >= y`; the other seven
/// come from symmetry. Candidates off the grid are skipped. A zero radius
/// yields the center cell alone.
pub fn midpoint_circle(center: Point, radius: u32, grid: &mut Grid, context: &ShapeContext) -> Circle {
    let (cx, cy) = (center.x.round() as i32, center.y.round() as i32);
    let mut circle = Circle::new(context, (cx, cy), radius);

    if radius == 0 {
        if let Some(cell) = take_cell(grid, cx, cy, context) {
            circle.insert(cell);
        }
        return circle;
    }

    let (mut x, mut y) = (0_i64, i64::from(radius));
    let mut p = 3 - 2 * y;
    while x < y {
        plot_octants(&mut circle, grid, context, (cx, cy), x, y);
        if p < 0 {
            p += 4 * x + 6;
        } else {
            p += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }

    log::debug!(
        "circle '{}' at ({cx}, {cy}) r={radius}: {} cells",
        context.name,
        circle.len()
    );
    circle
}

fn plot_octants(
    circle: &mut Circle,
    grid: &mut Grid,
    context: &ShapeContext,
    (cx, cy): (i32, i32),
    x: i64,
    y: i64,
) {
    let offsets = [(x, y), (-x, y), (x, -y), (-x, -y), (y, x), (-y, x), (y, -x), (-y, -x)];
    for (ox, oy) in offsets {
        let px = i64::from(cx) + ox;
        let py = i64::from(cy) + oy;
        let (Ok(px), Ok(py)) = (i32::try_from(px), i32::try_from(py)) else {
            continue;
        };
        if circle.contains(px, py) {
            continue;
        }
        if let Some(cell) = take_cell(grid, px, py, context) {
            circle.insert(cell);
        }
    }
}
