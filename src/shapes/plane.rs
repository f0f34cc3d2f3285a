use crate::math::Vector3;

/// An infinite half-space boundary: points `p` with `normal . p <= offset` are inside
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal, pointing out of the solid side
    normal: Vector3,

    /// Distance of the plane from the origin along the normal
    offset: f32,
}

impl Plane {
    pub fn new(normal: Vector3, offset: f32) -> Self {
        Self {
            normal: normal.normalize(),
            offset,
        }
    }

    /// Horizontal ground plane at height `y`
    pub fn ground(y: f32) -> Self {
        Self::new(Vector3::UP, y)
    }

    pub fn get_normal(&self) -> Vector3 {
        self.normal
    }

    pub fn get_offset(&self) -> f32 {
        self.offset
    }

    /// Positive above the plane, negative below
    pub fn signed_distance_to(&self, point: Vector3) -> f32 {
        self.normal.dot(&point) - self.offset
    }
}

