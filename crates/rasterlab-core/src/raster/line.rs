//! Line rasterizers.

use super::take_cell;
use crate::context::ShapeContext;
use crate::error::RasterResult;
use crate::grid::Grid;
use crate::shapes::Line;
use kurbo::Point;

/// Round both endpoints to cells and make sure they lie on the grid.
fn snap_endpoints(start: Point, end: Point, grid: &Grid) -> RasterResult<((i32, i32), (i32, i32))> {
    let s = (start.x.round() as i32, start.y.round() as i32);
    let e = (end.x.round() as i32, end.y.round() as i32);
    grid.check_bounds(s.0, s.1)?;
    grid.check_bounds(e.0, e.1)?;
    Ok((s, e))
}

/// Incremental-delta (DDA) rasterization.
///
/// Walks `steps + 1` positions from `start`, where `steps` is the larger of
/// the absolute deltas, rounding each to the nearest cell. Repeated cells are
/// kept.
pub fn dda(start: Point, end: Point, grid: &mut Grid, context: &ShapeContext) -> RasterResult<Line> {
    snap_endpoints(start, end, grid)?;

    let (dx, dy) = (end.x - start.x, end.y - start.y);
    // Absolute deltas first, then the larger one drives the step count.
    let steps = dx.abs().max(dy.abs()).ceil();
    let mut line = Line::new(context);

    if steps == 0.0 {
        let (x, y) = (start.x.round() as i32, start.y.round() as i32);
        line.extend(take_cell(grid, x, y, context));
        return Ok(line);
    }

    let (inc_x, inc_y) = (dx / steps, dy / steps);
    let (mut x, mut y) = (start.x, start.y);
    for _ in 0..=(steps as usize) {
        // Stays between the endpoints, so always on the grid.
        line.extend(take_cell(grid, x.round() as i32, y.round() as i32, context));
        x += inc_x;
        y += inc_y;
    }

    log::debug!("dda '{}': {} cells", context.name, line.len());
    Ok(line)
}

/// Midpoint-decision (Bresenham) rasterization.
///
/// The major axis advances every step; the minor axis advances when the
/// decision variable is positive.
pub fn bresenham(start: Point, end: Point, grid: &mut Grid, context: &ShapeContext) -> RasterResult<Line> {
    let ((x0, y0), (x1, y1)) = snap_endpoints(start, end, grid)?;

    let (dx, dy) = (i64::from(x1) - i64::from(x0), i64::from(y1) - i64::from(y0));
    let step_x = if dx < 0 { -1 } else { 1 };
    let step_y = if dy < 0 { -1 } else { 1 };
    let (abs_dx, abs_dy) = (dx.abs(), dy.abs());
    let shallow = abs_dy < abs_dx;
    let (d_minor, d_major) = if shallow { (abs_dy, abs_dx) } else { (abs_dx, abs_dy) };

    let mut p = 2 * d_minor - d_major;
    let p_neg = 2 * d_minor;
    let p_pos = 2 * (d_minor - d_major);

    let mut line = Line::new(context);
    let (mut x, mut y) = (x0, y0);
    for _ in 0..=d_major {
        line.extend(take_cell(grid, x, y, context));
        if shallow {
            x += step_x;
        } else {
            y += step_y;
        }
        if p > 0 {
            if shallow {
                y += step_y;
            } else {
                x += step_x;
            }
            p += p_pos;
        } else {
            p += p_neg;
        }
    }

    log::debug!("bresenham '{}': {} cells", context.name, line.len());
    Ok(line)
}
