//! Ownership tag for the shape currently being drawn.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Name and id stamped on every cell a rasterizer produces.
///
/// Passed explicitly to each rasterizer call; there is no ambient
/// "current shape".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeContext {
    pub name: String,
    pub id: ShapeId,
}

impl ShapeContext {
    /// Create a context with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(name, Uuid::new_v4())
    }

    /// Create a context with a caller-provided id.
    pub fn with_id(name: impl Into<String>, id: ShapeId) -> Self {
        Self { name: name.into(), id }
    }
}
