//! Rasterized line.

use super::{ShapeKind, ShapeTrait};
use crate::context::{ShapeContext, ShapeId};
use crate::grid::Cell;
use serde::{Deserialize, Serialize};

/// The cells of a rasterized segment, ordered from start to end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    pub(crate) id: ShapeId,
    pub(crate) name: String,
    cells: Vec<Cell>,
}

impl Line {
    /// Create an empty line owned by `context`.
    pub fn new(context: &ShapeContext) -> Self {
        Self {
            id: context.id,
            name: context.name.clone(),
            cells: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// First cell of the line.
    pub fn start(&self) -> Option<&Cell> {
        self.cells.first()
    }

    /// Last cell of the line.
    pub fn end(&self) -> Option<&Cell> {
        self.cells.last()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells not hidden by clipping.
    pub fn visible_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.visible)
    }
}

impl Extend<Cell> for Line {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl ShapeTrait for Line {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
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
    fn test_endpoints() {
        let ctx = ShapeContext::new("line");
        let mut line = Line::new(&ctx);
        assert!(line.is_empty());
        assert!(line.start().is_none());

        line.push(Cell::empty(0, 0));
        line.push(Cell::empty(1, 1));
        line.push(Cell::empty(2, 2));

        assert_eq!(line.len(), 3);
        assert_eq!(line.start().map(|c| (c.x, c.y)), Some((0, 0)));
        assert_eq!(line.end().map(|c| (c.x, c.y)), Some((2, 2)));
    }

    #[test]
    fn test_visible_cells() {
        let ctx = ShapeContext::new("line");
        let mut line = Line::new(&ctx);
        let mut hidden = Cell::empty(0, 0);
        hidden.visible = false;
        line.push(hidden);
        line.push(Cell::empty(1, 0));
        assert_eq!(line.visible_cells().count(), 1);
    }
}
