//! Error types for the rasterization core.

use crate::context::ShapeId;
use crate::shapes::ShapeKind;
use thiserror::Error;

/// Errors raised by the core.
///
/// Points leaving the grid during a transform or circle candidates that fall
/// outside it are not errors; those are dropped silently.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Dimension mismatch: expected a point of length {expected}, got {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("Point ({x}, {y}) lies outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    #[error("Invalid grid size {width}x{height}")]
    InvalidGrid { width: usize, height: usize },
    #[error("Shape not found: {0}")]
    ShapeNotFound(ShapeId),
    #[error("Expected a {expected:?} shape, found a {found:?}")]
    WrongShapeKind { expected: ShapeKind, found: ShapeKind },
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RasterError {
    fn from(err: serde_json::Error) -> Self {
        RasterError::Serialization(err.to_string())
    }
}

/// Result type for core operations.
pub type RasterResult<T> = Result<T, RasterError>;
