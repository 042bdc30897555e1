//! 3x3 homogeneous matrices for 2D affine maps.

use crate::error::{RasterError, RasterResult};
use crate::transform::TransformMode;
use kurbo::{Affine, Point};
use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Row-major 3x3 matrix applied as `M · [x, y, 1]ᵗ`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix(pub [[f64; 3]; 3]);

impl Matrix {
    pub const IDENTITY: Matrix = Matrix([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    pub fn translate(dx: f64, dy: f64) -> Self {
        Matrix([[1.0, 0.0, dx], [0.0, 1.0, dy], [0.0, 0.0, 1.0]])
    }

    /// Counter-clockwise rotation about the origin.
    pub fn rotate(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Matrix([[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]])
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Matrix([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Mirror the x coordinate, the y coordinate, or both.
    pub fn reflect(mirror_x: bool, mirror_y: bool) -> Self {
        let sx = if mirror_x { -1.0 } else { 1.0 };
        let sy = if mirror_y { -1.0 } else { 1.0 };
        Self::scale(sx, sy)
    }

    /// Conjugate `self` by a translation so it acts around `pivot`.
    pub fn about(self, pivot: Point) -> Self {
        Self::translate(pivot.x, pivot.y) * self * Self::translate(-pivot.x, -pivot.y)
    }

    pub fn entry(&self, row: usize, col: usize) -> f64 {
        self.0[row][col]
    }

    /// `result[i] = Σ_j self[i][j] * point[j]`.
    ///
    /// Fails with [`RasterError::DimensionMismatch`] unless `point` has three
    /// components.
    pub fn multiply_point(&self, point: &[f64]) -> RasterResult<[f64; 3]> {
        if point.len() != self.0.len() {
            return Err(RasterError::DimensionMismatch {
                expected: self.0.len(),
                found: point.len(),
            });
        }
        let mut result = [0.0; 3];
        for (out, row) in result.iter_mut().zip(&self.0) {
            *out = row.iter().zip(point).map(|(m, p)| m * p).sum();
        }
        Ok(result)
    }

    /// Apply to the homogeneous point `(x, y, 1)`.
    pub fn apply(&self, x: f64, y: f64) -> RasterResult<(f64, f64)> {
        let [nx, ny, _] = self.multiply_point(&[x, y, 1.0])?;
        Ok((nx, ny))
    }

    pub fn to_affine(&self) -> Affine {
        let m = &self.0;
        Affine::new([m[0][0], m[1][0], m[0][1], m[1][1], m[0][2], m[1][2]])
    }

    pub fn from_affine(affine: Affine) -> Self {
        let [a, b, c, d, e, f] = affine.as_coeffs();
        Matrix([[a, c, e], [b, d, f], [0.0, 0.0, 1.0]])
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = (0..3).map(|k| self.0[i][k] * rhs.0[k][j]).sum();
            }
        }
        Matrix(out)
    }
}

/// A user-level transformation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transformation {
    Translate {
        dx: f64,
        dy: f64,
    },
    /// Rotation in degrees, about `pivot` or the grid origin.
    Rotate {
        degrees: f64,
        #[serde(default)]
        pivot: Option<Point>,
    },
    Scale {
        sx: f64,
        sy: f64,
        #[serde(default)]
        pivot: Option<Point>,
    },
    /// Mirror across the origin of the chosen axes.
    Reflect {
        #[serde(default)]
        x: bool,
        #[serde(default)]
        y: bool,
    },
}

impl Transformation {
    pub fn matrix(&self) -> Matrix {
        match *self {
            Transformation::Translate { dx, dy } => Matrix::translate(dx, dy),
            Transformation::Rotate { degrees, pivot } => {
                let m = Matrix::rotate(degrees.to_radians());
                pivot.map_or(m, |p| m.about(p))
            }
            Transformation::Scale { sx, sy, pivot } => {
                let m = Matrix::scale(sx, sy);
                pivot.map_or(m, |p| m.about(p))
            }
            Transformation::Reflect { x, y } => Matrix::reflect(x, y),
        }
    }

    pub fn mode(&self) -> TransformMode {
        match self {
            Transformation::Reflect { .. } => TransformMode::Reflect,
            _ => TransformMode::Snap,
        }
    }
}
