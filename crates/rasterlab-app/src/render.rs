//! Text rendering of a grid.

use rasterlab_core::Grid;

/// Render the grid one row per line, `y = 0` first.
///
/// `#` marks a selected visible cell, `.` a selected cell hidden by clipping,
/// and a space anything else.
pub fn render(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let symbol = match grid.get(x, y) {
                Some(cell) if cell.selected && cell.visible => '#',
                Some(cell) if cell.selected => '.',
                _ => ' ',
            };
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use rasterlab_core::{ClipAlgorithm, LineAlgorithm, ShapeContext, ShapeTrait, Window};

    #[test]
    fn test_render_empty() {
        let grid = Grid::new(3, 2).unwrap();
        assert_eq!(render(&grid), "   \n   \n");
    }

    #[test]
    fn test_render_clipped_line() {
        let mut grid = Grid::new(5, 1).unwrap();
        let mut line = LineAlgorithm::Dda
            .rasterize(Point::new(0.0, 0.0), Point::new(4.0, 0.0), &mut grid, &ShapeContext::new("l"))
            .unwrap();
        let window = Window::new(Point::new(1.0, 0.0), Point::new(3.0, 0.0));
        ClipAlgorithm::CohenSutherland.clip(&mut line, &window);
        grid.stamp(line.cells());
        assert_eq!(render(&grid), ".###.\n");
    }
}
