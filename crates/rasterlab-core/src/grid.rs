//! Fixed-size pixel grid and its cells.

use crate::context::{ShapeContext, ShapeId};
use crate::error::{RasterError, RasterResult};
use serde::{Deserialize, Serialize};

/// A single grid element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    /// Highlighted as part of a drawn shape.
    pub selected: bool,
    /// Shown, or suppressed by clipping.
    pub visible: bool,
    /// Name of the owning shape, empty when unowned.
    pub shape_name: String,
    /// Id of the owning shape.
    pub shape_id: Option<ShapeId>,
}

impl Cell {
    /// An unowned, unselected, visible cell.
    pub fn empty(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            selected: false,
            visible: true,
            shape_name: String::new(),
            shape_id: None,
        }
    }

    /// Mark the cell as selected and owned by the given shape.
    pub fn tag(&mut self, context: &ShapeContext) {
        self.selected = true;
        self.shape_name.clone_from(&context.name);
        self.shape_id = Some(context.id);
    }

    /// Drop selection and ownership. Visibility is left as is.
    pub fn untag(&mut self) {
        self.selected = false;
        self.shape_name.clear();
        self.shape_id = None;
    }

    pub fn is_owned(&self) -> bool {
        self.shape_id.is_some()
    }
}

/// A `width x height` array of cells, addressed as `(x, y)`.
///
/// Dimensions are fixed at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Column-major: index = x * height + y.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of empty cells.
    pub fn new(width: usize, height: usize) -> RasterResult<Self> {
        if width == 0 || height == 0 || width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(RasterError::InvalidGrid { width, height });
        }
        let mut cells = Vec::with_capacity(width * height);
        for x in 0..width {
            for y in 0..height {
                cells.push(Cell::empty(x as i32, y as i32));
            }
        }
        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` addresses a cell of this grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Same as [`Grid::contains`] for real-valued coordinates.
    pub fn contains_f64(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && y >= 0.0 && x < self.width as f64 && y < self.height as f64
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| x as usize * self.height + y as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        self.index(x, y).map(move |i| &mut self.cells[i])
    }

    /// Fail with [`RasterError::OutOfBounds`] unless `(x, y)` is on the grid.
    pub fn check_bounds(&self, x: i32, y: i32) -> RasterResult<()> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(RasterError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Unset selection and ownership of the cell at `(x, y)`.
    pub fn clear_cell(&mut self, x: i32, y: i32) {
        if let Some(cell) = self.get_mut(x, y) {
            cell.untag();
        }
    }

    /// Reset the cell at `(x, y)` to an empty, visible cell.
    pub fn erase(&mut self, x: i32, y: i32) {
        if let Some(cell) = self.get_mut(x, y) {
            *cell = Cell::empty(x, y);
        }
    }

    /// Write a cell at its own coordinates. Returns false when it lies off the grid.
    pub fn put(&mut self, cell: &Cell) -> bool {
        match self.get_mut(cell.x, cell.y) {
            Some(slot) => {
                slot.clone_from(cell);
                true
            }
            None => false,
        }
    }

    /// Write every cell of a shape into the grid, skipping off-grid cells.
    pub fn stamp(&mut self, cells: &[Cell]) {
        for cell in cells {
            self.put(cell);
        }
    }

    /// Copy the `visible` flag of a shape's cells into the grid.
    ///
    /// Only grid cells still owned by `id` are touched; cells a later shape
    /// drew over keep their owner and flags.
    pub fn sync_visibility(&mut self, id: ShapeId, cells: &[Cell]) {
        for cell in cells {
            if let Some(slot) = self.get_mut(cell.x, cell.y) {
                if slot.shape_id == Some(id) {
                    slot.visible = cell.visible;
                }
            }
        }
    }

    /// Reset every cell to empty.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            let (x, y) = (cell.x, cell.y);
            *cell = Cell::empty(x, y);
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn selected_count(&self) -> usize {
        self.cells.iter().filter(|c| c.selected).count()
    }

    /// Check the invariants a deserialized grid must hold.
    pub(crate) fn validate(&self) -> RasterResult<()> {
        if self.width == 0 || self.height == 0 || self.cells.len() != self.width * self.height {
            return Err(RasterError::InvalidGrid {
                width: self.width,
                height: self.height,
            });
        }
        let misplaced = self
            .cells
            .iter()
            .enumerate()
            .any(|(i, c)| self.index(c.x, c.y) != Some(i));
        if misplaced {
            return Err(RasterError::Serialization(
                "grid cell stored at the wrong position".to_string(),
            ));
        }
        Ok(())
    }
}
