use crate::math::{Vector3, Quaternion};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Rigid placement of a body in world space (no scale)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Transform {
    pub position: Vector3,
    pub rotation: Quaternion,
}

impl Transform {
    #[inline]
    pub fn new(position: Vector3, rotation: Quaternion) -> Self {
        Self { position, rotation }
    }

    #[inline]
    pub fn from_position(position: Vector3) -> Self {
        Self::new(position, Quaternion::identity())
    }

    /// Maps a body-local point into world space
    #[inline]
    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        self.rotation.rotate_vector(point) + self.position
    }

    /// Maps a body-local direction into world space
    #[inline]
    pub fn transform_direction(&self, direction: Vector3) -> Vector3 {
        self.rotation.rotate_vector(direction)
    }

    /// Column-major 4x4 matrix, the layout OpenGL-style renderers consume
    pub fn to_gl_matrix(&self) -> [f32; 16] {
        let r = self.rotation.to_rotation_matrix().data;
        let p = self.position;
        [
            r[0][0], r[1][0], r[2][0], 0.0,
            r[0][1], r[1][1], r[2][1], 0.0,
            r[0][2], r[1][2], r[2][2], 0.0,
            p.x, p.y, p.z, 1.0,
        ]
    }
}
