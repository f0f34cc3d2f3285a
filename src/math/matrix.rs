use nalgebra as na;
use crate::math::Vector3;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Row-major 3x3 matrix, used for inertia tensors and rotations
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix3 {
    pub data: [[f32; 3]; 3],
}

impl Matrix3 {
    #[inline]
    pub fn new(data: [[f32; 3]; 3]) -> Self {
        Self { data }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::from_diagonal(Vector3::one())
    }

    #[inline]
    pub fn zero() -> Self {
        Self { data: [[0.0; 3]; 3] }
    }

    #[inline]
    pub fn from_diagonal(d: Vector3) -> Self {
        Self::new([
            [d.x, 0.0, 0.0],
            [0.0, d.y, 0.0],
            [0.0, 0.0, d.z],
        ])
    }

    /// Inverse of the matrix, or `None` when it is singular
    pub fn inverse(&self) -> Option<Self> {
        self.to_nalgebra()
            .try_inverse()
            .map(|m| Self::from_nalgebra(&m))
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.data;
        Self::new([[a, d, g], [b, e, h], [c, f, i]])
    }

    #[inline]
    pub fn multiply_vector(&self, v: Vector3) -> Vector3 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.data;

        Vector3::new(
            a * v.x + b * v.y + c * v.z,
            d * v.x + e * v.y + f * v.z,
            g * v.x + h * v.y + i * v.z,
        )
    }

    pub fn multiply_matrix(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for i in 0..3 {
            for j in 0..3 {
                result.data[i][j] = (0..3).map(|k| self.data[i][k] * other.data[k][j]).sum();
            }
        }
        result
    }

    #[inline]
    pub fn to_nalgebra(&self) -> na::Matrix3<f32> {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.data;
        na::Matrix3::new(a, b, c, d, e, f, g, h, i)
    }

    #[inline]
    pub fn from_nalgebra(m: &na::Matrix3<f32>) -> Self {
        Self::new([
            [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
            [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
            [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
        ])
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}
