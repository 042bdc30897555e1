//! RasterLab Core Library
//!
//! Integer-grid rasterization kernel: line and circle rasterizers, affine
//! transforms over drawn shapes, and line clipping against a window.

pub mod canvas;
pub mod clip;
pub mod context;
pub mod error;
pub mod grid;
pub mod matrix;
pub mod raster;
pub mod shapes;
pub mod transform;

pub use canvas::{Canvas, CanvasConfig};
pub use clip::{ClipAlgorithm, Window};
pub use context::{ShapeContext, ShapeId};
pub use error::{RasterError, RasterResult};
pub use grid::{Cell, Grid};
pub use matrix::{Matrix, Transformation};
pub use raster::LineAlgorithm;
pub use shapes::{Circle, Line, Shape, ShapeKind, ShapeTrait};
pub use transform::TransformMode;
