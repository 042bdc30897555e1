//! Parametric clipping.

use super::Window;
use kurbo::Point;

/// Clip `start -> end` with the Liang–Barsky algorithm.
///
/// The segment is `start + t * (end - start)` for `t` in `[0, 1]`; each
/// window edge narrows the interval or rejects the segment.
pub fn liang_barsky(start: Point, end: Point, window: &Window) -> Option<(Point, Point)> {
    let (lower, upper) = (window.lower(), window.upper());
    let delta = end - start;

    // (p, q) per edge: left, right, bottom, top.
    let edges = [
        (-delta.x, start.x - lower.x),
        (delta.x, upper.x - start.x),
        (-delta.y, start.y - lower.y),
        (delta.y, upper.y - start.y),
    ];

    let (mut t_entry, mut t_exit) = (0.0_f64, 1.0_f64);
    for (p, q) in edges {
        if p < 0.0 {
            let r = q / p;
            if r > t_exit {
                return None;
            }
            t_entry = t_entry.max(r);
        } else if p > 0.0 {
            let r = q / p;
            if r < t_entry {
                return None;
            }
            t_exit = t_exit.min(r);
        } else if q < 0.0 {
            // Parallel to this edge and outside it.
            return None;
        }
    }

    log::trace!("liang-barsky: t in [{t_entry}, {t_exit}]");
    Some((start + delta * t_entry, start + delta * t_exit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Window {
        Window::new(Point::new(2.0, 2.0), Point::new(8.0, 8.0))
    }

    #[test]
    fn test_inside_segment_unchanged() {
        let (a, b) = (Point::new(3.0, 4.0), Point::new(7.0, 5.0));
        assert_eq!(liang_barsky(a, b, &window()), Some((a, b)));
    }

    #[test]
    fn test_corner_to_corner() {
        let result = liang_barsky(Point::new(0.0, 0.0), Point::new(10.0, 10.0), &window());
        assert_eq!(result, Some((Point::new(2.0, 2.0), Point::new(8.0, 8.0))));
    }

    #[test]
    fn test_parallel_outside_rejected() {
        let result = liang_barsky(Point::new(0.0, 1.0), Point::new(10.0, 1.0), &window());
        assert_eq!(result, None);
    }

    #[test]
    fn test_parallel_inside_clipped() {
        let result = liang_barsky(Point::new(0.0, 4.0), Point::new(10.0, 4.0), &window());
        assert_eq!(result, Some((Point::new(2.0, 4.0), Point::new(8.0, 4.0))));
    }

    #[test]
    fn test_point_segment() {
        let inside = Point::new(5.0, 5.0);
        assert_eq!(liang_barsky(inside, inside, &window()), Some((inside, inside)));
        let outside = Point::new(0.0, 0.0);
        assert_eq!(liang_barsky(outside, outside, &window()), None);
    }
}
