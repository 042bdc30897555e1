//! Rasterized circle.

use super::{ShapeKind, ShapeTrait};
use crate::context::{ShapeContext, ShapeId};
use crate::grid::Cell;
use serde::{Deserialize, Serialize};

/// The cells of a rasterized circle. Order carries no meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: ShapeId,
    pub(crate) name: String,
    /// Center passed to the midpoint rasterizer.
    ///
    /// Fixed at draw time: transforms move the cells and leave this alone,
    /// so after a transform it no longer describes where the ring sits.
    pub center: (i32, i32),
    /// Radius passed to the midpoint rasterizer. Fixed at draw time like
    /// `center`.
    pub radius: u32,
    cells: Vec<Cell>,
}

impl Circle {
    /// Create an empty circle owned by `context`.
    pub fn new(context: &ShapeContext, center: (i32, i32), radius: u32) -> Self {
        Self {
            id: context.id,
            name: context.name.clone(),
            center,
            radius,
            cells: Vec::new(),
        }
    }

    /// Add a cell unless one with the same coordinates is already present.
    pub(crate) fn insert(&mut self, cell: Cell) -> bool {
        if self.contains(cell.x, cell.y) {
            return false;
        }
        self.cells.push(cell);
        true
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.cells.iter().any(|c| c.x == x && c.y == y)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl ShapeTrait for Circle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn cells_mut(&mut self) -> &mut Vec<Cell> {
        &mut self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_deduplicates() {
        let ctx = ShapeContext::new("circle");
        let mut circle = Circle::new(&ctx, (5, 5), 2);
        assert!(circle.insert(Cell::empty(5, 7)));
        assert!(!circle.insert(Cell::empty(5, 7)));
        assert_eq!(circle.len(), 1);
        assert!(circle.contains(5, 7));
    }
}
