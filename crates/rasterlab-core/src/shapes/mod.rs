//! Shapes produced by the rasterizers.

mod circle;
mod line;

pub use circle::Circle;
pub use line::Line;

use crate::context::ShapeId;
use crate::grid::Cell;
use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// Kind tag of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Circle,
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Name the shape was drawn under.
    fn name(&self) -> &str;

    fn kind(&self) -> ShapeKind;

    /// Cells currently owned by the shape.
    fn cells(&self) -> &[Cell];

    /// Mutable access for the transform engine and the clippers.
    fn cells_mut(&mut self) -> &mut Vec<Cell>;

    /// Bounding box of the owned cells, `None` when the shape is empty.
    fn bounds(&self) -> Option<Rect> {
        let cells = self.cells();
        let first = cells.first()?;
        let start = Rect::new(first.x as f64, first.y as f64, first.x as f64, first.y as f64);
        Some(cells.iter().fold(start, |rect, c| {
            rect.union_pt(kurbo::Point::new(c.x as f64, c.y as f64))
        }))
    }

    /// Make every owned cell visible again.
    fn reset_visibility(&mut self) {
        for cell in self.cells_mut().iter_mut() {
            cell.visible = true;
        }
    }
}

/// Enum wrapper for all shape types (for serialization).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    Line(Line),
    Circle(Circle),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        self.as_trait().id()
    }

    pub fn name(&self) -> &str {
        self.as_trait().name()
    }

    pub fn kind(&self) -> ShapeKind {
        self.as_trait().kind()
    }

    pub fn cells(&self) -> &[Cell] {
        self.as_trait().cells()
    }

    pub fn cells_mut(&mut self) -> &mut Vec<Cell> {
        self.as_trait_mut().cells_mut()
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.as_trait().bounds()
    }

    pub fn reset_visibility(&mut self) {
        self.as_trait_mut().reset_visibility();
    }

    pub fn as_line_mut(&mut self) -> Option<&mut Line> {
        match self {
            Shape::Line(line) => Some(line),
            Shape::Circle(_) => None,
        }
    }

    fn as_trait(&self) -> &dyn ShapeTrait {
        match self {
            Shape::Line(s) => s,
            Shape::Circle(s) => s,
        }
    }

    pub(crate) fn as_trait_mut(&mut self) -> &mut dyn ShapeTrait {
        match self {
            Shape::Line(s) => s,
            Shape::Circle(s) => s,
        }
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Shape::Line(line)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ShapeContext;

    fn tagged(x: i32, y: i32, ctx: &ShapeContext) -> Cell {
        let mut cell = Cell::empty(x, y);
        cell.tag(ctx);
        cell
    }

    #[test]
    fn test_bounds_of_cells() {
        let ctx = ShapeContext::new("l");
        let mut line = Line::new(&ctx);
        line.push(tagged(3, 1, &ctx));
        line.push(tagged(1, 4, &ctx));
        let shape = Shape::from(line);
        let bounds = shape.bounds().unwrap();
        assert!((bounds.x0 - 1.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 1.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 3.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_shape_has_no_bounds() {
        let shape = Shape::from(Line::new(&ShapeContext::new("l")));
        assert!(shape.bounds().is_none());
    }

    #[test]
    fn test_dispatch() {
        let ctx = ShapeContext::new("c");
        let mut shape = Shape::from(Circle::new(&ctx, (2, 2), 1));
        assert_eq!(shape.kind(), ShapeKind::Circle);
        assert_eq!(shape.id(), ctx.id);
        assert_eq!(shape.name(), "c");
        assert!(shape.as_line_mut().is_none());
    }

    #[test]
    fn test_reset_visibility() {
        let ctx = ShapeContext::new("l");
        let mut line = Line::new(&ctx);
        let mut hidden = tagged(0, 0, &ctx);
        hidden.visible = false;
        line.push(hidden);
        let mut shape = Shape::from(line);
        shape.reset_visibility();
        assert!(shape.cells().iter().all(|c| c.visible));
    }
}
