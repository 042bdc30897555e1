//! Region-code clipping.

use super::Window;
use kurbo::Point;

const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

fn outcode(point: Point, window: &Window) -> u8 {
    let (lower, upper) = (window.lower(), window.upper());
    let mut code = 0;
    if point.y < lower.y {
        code |= BOTTOM;
    } else if point.y > upper.y {
        code |= TOP;
    }
    if point.x > upper.x {
        code |= RIGHT;
    } else if point.x < lower.x {
        code |= LEFT;
    }
    code
}

/// Clip `start -> end` with the Cohen–Sutherland algorithm.
///
/// Outside endpoints are moved onto the boundary named by their region code,
/// checked in the order right, left, top, bottom, until both codes are zero
/// or share a bit.
pub fn cohen_sutherland(mut start: Point, mut end: Point, window: &Window) -> Option<(Point, Point)> {
    let (lower, upper) = (window.lower(), window.upper());
    let mut code_start = outcode(start, window);
    let mut code_end = outcode(end, window);

    loop {
        if code_start | code_end == 0 {
            return Some((start, end));
        }
        if code_start & code_end != 0 {
            return None;
        }

        let move_start = code_start != 0;
        let code = if move_start { code_start } else { code_end };
        let (dx, dy) = (end.x - start.x, end.y - start.y);

        // A shared-side bit was ruled out above, so the delta along the
        // crossed axis is never zero here.
        let crossing = if code & RIGHT != 0 {
            Point::new(upper.x, start.y + dy * (upper.x - start.x) / dx)
        } else if code & LEFT != 0 {
            Point::new(lower.x, start.y + dy * (lower.x - start.x) / dx)
        } else if code & TOP != 0 {
            Point::new(start.x + dx * (upper.y - start.y) / dy, upper.y)
        } else {
            Point::new(start.x + dx * (lower.y - start.y) / dy, lower.y)
        };

        if move_start {
            start = crossing;
            code_start = outcode(start, window);
        } else {
            end = crossing;
            code_end = outcode(end, window);
        }
        log::trace!("cohen-sutherland: moved endpoint to ({}, {})", crossing.x, crossing.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Window {
        Window::new(Point::new(2.0, 2.0), Point::new(8.0, 8.0))
    }

    #[test]
    fn test_outcodes() {
        let w = window();
        assert_eq!(outcode(Point::new(5.0, 5.0), &w), 0);
        assert_eq!(outcode(Point::new(0.0, 0.0), &w), LEFT | BOTTOM);
        assert_eq!(outcode(Point::new(9.0, 9.0), &w), RIGHT | TOP);
        assert_eq!(outcode(Point::new(5.0, 9.0), &w), TOP);
        assert_eq!(outcode(Point::new(8.0, 2.0), &w), 0);
    }

    #[test]
    fn test_inside_segment_unchanged() {
        let (a, b) = (Point::new(3.0, 4.0), Point::new(7.0, 5.0));
        assert_eq!(cohen_sutherland(a, b, &window()), Some((a, b)));
    }

    #[test]
    fn test_trivial_reject() {
        let result = cohen_sutherland(Point::new(0.0, 0.0), Point::new(1.0, 10.0), &window());
        assert_eq!(result, None);
    }

    #[test]
    fn test_corner_to_corner() {
        let result = cohen_sutherland(Point::new(0.0, 0.0), Point::new(10.0, 10.0), &window());
        assert_eq!(result, Some((Point::new(2.0, 2.0), Point::new(8.0, 8.0))));
    }

    #[test]
    fn test_vertical_crossing_top() {
        let result = cohen_sutherland(Point::new(5.0, 5.0), Point::new(5.0, 12.0), &window());
        assert_eq!(result, Some((Point::new(5.0, 5.0), Point::new(5.0, 8.0))));
    }
}
