//! 2D affine transformations
//!
//! Provides a row-major 3x3 matrix for translating, scaling, and rotating
//! planar shapes, plus a classification that detects similarity transforms
//! (uniform scale + rotation + optional reflection). Circular arcs and
//! ellipses map exactly under similarities; everything else falls back to
//! Bezier conversion at the shape level.

use super::Vector2;
use std::ops::Mul;

/// Row-major 3x3 matrix for 2D affine transformations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2 {
    /// Matrix elements stored in row-major order; the last row is
    /// implicitly `[0, 0, 1]` but kept for composition simplicity.
    pub m: [[f64; 3]; 3],
}

/// Classification of a transform for exact-vs-approximate shape mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformKind {
    /// Uniform scale + rotation + optional reflection + translation.
    Similarity {
        /// Uniform scale factor (non-negative)
        scale: f64,
        /// Rotation angle in radians
        rotation: f64,
        /// True when the transform flips orientation (determinant < 0)
        reflected: bool,
    },
    /// Any other affine map (non-uniform scale, shear)
    General,
}

impl Transform2 {
    /// Create identity transform
    pub fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Create zero matrix
    fn zero() -> Self {
        Self { m: [[0.0; 3]; 3] }
    }

    /// Create translation transform
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self {
            m: [[1.0, 0.0, tx], [0.0, 1.0, ty], [0.0, 0.0, 1.0]],
        }
    }

    /// Create scaling transform
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self {
            m: [[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Create rotation transform (angle in radians, counterclockwise)
    pub fn rotation(angle: f64) -> Self {
        let cos = angle.cos();
        let sin = angle.sin();
        Self {
            m: [[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Apply the transform to a point
    pub fn apply(&self, p: Vector2) -> Vector2 {
        Vector2::new(
            self.m[0][0] * p.x + self.m[0][1] * p.y + self.m[0][2],
            self.m[1][0] * p.x + self.m[1][1] * p.y + self.m[1][2],
        )
    }

    /// Calculate determinant of the linear part
    pub fn determinant(&self) -> f64 {
        self.m[0][0] * self.m[1][1] - self.m[0][1] * self.m[1][0]
    }

    /// Classify the transform.
    ///
    /// A similarity requires the two columns of the linear part to be
    /// orthogonal and of equal length.
    pub fn classify(&self) -> TransformKind {
        let col0 = Vector2::new(self.m[0][0], self.m[1][0]);
        let col1 = Vector2::new(self.m[0][1], self.m[1][1]);
        let l0 = col0.length();
        let l1 = col1.length();
        let tol = 1e-9 * l0.max(l1).max(1.0);
        if (l0 - l1).abs() <= tol && col0.dot(&col1).abs() <= tol * l0.max(1.0) {
            TransformKind::Similarity {
                scale: l0,
                rotation: self.m[1][0].atan2(self.m[0][0]),
                reflected: self.determinant() < 0.0,
            }
        } else {
            TransformKind::General
        }
    }

    /// Combine with another transform (other applied to points first)
    pub fn compose(&self, other: &Transform2) -> Transform2 {
        let mut result = Self::zero();
        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    result.m[i][j] += self.m[i][k] * other.m[k][j];
                }
            }
        }
        result
    }
}

impl Default for Transform2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Transform2 {
    type Output = Self;

    /// `(a * b).apply(p)` equals `a.apply(b.apply(p))`
    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(&rhs)
    }
}
