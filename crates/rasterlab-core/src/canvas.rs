//! Canvas document: the grid plus every shape drawn on it.

use crate::clip::{ClipAlgorithm, Window};
use crate::context::{ShapeContext, ShapeId};
use crate::error::{RasterError, RasterResult};
use crate::grid::Grid;
use crate::matrix::Transformation;
use crate::raster::{self, LineAlgorithm};
use crate::shapes::{Shape, ShapeKind, ShapeTrait};
use crate::transform;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default grid width in cells.
pub const DEFAULT_WIDTH: usize = 40;
/// Default grid height in cells.
pub const DEFAULT_HEIGHT: usize = 40;

fn default_width() -> usize {
    DEFAULT_WIDTH
}

fn default_height() -> usize {
    DEFAULT_HEIGHT
}

/// Canvas dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// A grid together with the shapes drawn on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Canvas {
    grid: Grid,
    /// All shapes, keyed by ID.
    shapes: HashMap<ShapeId, Shape>,
    /// Drawing order.
    z_order: Vec<ShapeId>,
}

impl Canvas {
    /// Create an empty canvas.
    pub fn new(config: CanvasConfig) -> RasterResult<Self> {
        Ok(Self {
            grid: Grid::new(config.width, config.height)?,
            shapes: HashMap::new(),
            z_order: Vec::new(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Shapes in drawing order.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.z_order.iter().filter_map(|id| self.shapes.get(id))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Id of the earliest drawn shape with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<ShapeId> {
        self.shapes().find(|s| s.name() == name).map(Shape::id)
    }

    fn add_shape(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        if self.shapes.contains_key(&id) {
            log::warn!("Shape {} redrawn, replacing the previous one", id);
            self.z_order.retain(|&other| other != id);
        }
        self.z_order.push(id);
        self.shapes.insert(id, shape);
        id
    }

    /// Rasterize a line and keep it on the canvas.
    pub fn draw_line(
        &mut self,
        algorithm: LineAlgorithm,
        start: Point,
        end: Point,
        context: &ShapeContext,
    ) -> RasterResult<ShapeId> {
        let line = algorithm.rasterize(start, end, &mut self.grid, context)?;
        Ok(self.add_shape(line.into()))
    }

    /// Rasterize a circle and keep it on the canvas.
    pub fn draw_circle(&mut self, center: Point, radius: u32, context: &ShapeContext) -> ShapeId {
        let circle = raster::midpoint_circle(center, radius, &mut self.grid, context);
        self.add_shape(circle.into())
    }

    /// Apply a transformation to a stored shape.
    pub fn transform(&mut self, id: ShapeId, transformation: &Transformation) -> RasterResult<()> {
        let shape = self.shapes.get_mut(&id).ok_or(RasterError::ShapeNotFound(id))?;
        transform::apply(
            &transformation.matrix(),
            transformation.mode(),
            shape.as_trait_mut(),
            &mut self.grid,
        )
    }

    /// Clip one stored line; circles are rejected.
    pub fn clip_shape(
        &mut self,
        id: ShapeId,
        window: &Window,
        algorithm: ClipAlgorithm,
    ) -> RasterResult<Option<(Point, Point)>> {
        let shape = self.shapes.get_mut(&id).ok_or(RasterError::ShapeNotFound(id))?;
        let found = shape.kind();
        let line = shape.as_line_mut().ok_or(RasterError::WrongShapeKind {
            expected: ShapeKind::Line,
            found,
        })?;
        let endpoints = algorithm.clip(line, window);
        self.grid.sync_visibility(id, line.cells());
        Ok(endpoints)
    }

    /// Clip every stored line against `window`. Circles are left alone.
    ///
    /// Returns how many lines keep at least part of their extent.
    pub fn clip_lines(&mut self, window: &Window, algorithm: ClipAlgorithm) -> usize {
        let mut kept = 0;
        for id in &self.z_order {
            let Some(line) = self.shapes.get_mut(id).and_then(Shape::as_line_mut) else {
                continue;
            };
            if algorithm.clip(line, window).is_some() {
                kept += 1;
            }
            self.grid.sync_visibility(*id, line.cells());
        }
        kept
    }

    /// Make every shape fully visible again.
    pub fn reset_visibility(&mut self) {
        for shape in self.shapes.values_mut() {
            shape.reset_visibility();
            self.grid.sync_visibility(shape.id(), shape.cells());
        }
    }

    /// Remove a shape and erase the grid cells it still owns.
    pub fn remove_shape(&mut self, id: ShapeId) -> RasterResult<Shape> {
        let shape = self.shapes.remove(&id).ok_or(RasterError::ShapeNotFound(id))?;
        self.z_order.retain(|&other| other != id);
        for cell in shape.cells() {
            let owned = self
                .grid
                .get(cell.x, cell.y)
                .is_some_and(|c| c.shape_id == Some(id));
            if owned {
                self.grid.erase(cell.x, cell.y);
            }
        }
        Ok(shape)
    }

    /// Drop every shape and reset the grid.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.z_order.clear();
        self.grid.reset();
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> RasterResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON, checking the grid layout.
    pub fn from_json(json: &str) -> RasterResult<Self> {
        let canvas: Canvas = serde_json::from_str(json)?;
        canvas.grid.validate()?;
        Ok(canvas)
    }
}
