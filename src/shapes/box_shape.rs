use crate::shapes::Shape;
use crate::math::{Vector3, Matrix3};

/// A box (cuboid) collision shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShape {
    /// The half-extents of the box (half-width, half-height, half-depth)
    half_extents: Vector3,
}

impl BoxShape {
    /// Creates a new box; negative half-extents are clamped to zero
    pub fn new(half_extents: Vector3) -> Self {
        Self {
            half_extents: Vector3::new(
                half_extents.x.max(0.0),
                half_extents.y.max(0.0),
                half_extents.z.max(0.0),
            ),
        }
    }

    pub fn get_half_extents(&self) -> Vector3 {
        self.half_extents
    }

    /// The 8 corners of the box in body space
    pub fn get_vertices(&self) -> [Vector3; 8] {
        let Vector3 { x, y, z } = self.half_extents;
        [
            Vector3::new(-x, -y, -z),
            Vector3::new(x, -y, -z),
            Vector3::new(x, y, -z),
            Vector3::new(-x, y, -z),
            Vector3::new(-x, -y, z),
            Vector3::new(x, -y, z),
            Vector3::new(x, y, z),
            Vector3::new(-x, y, z),
        ]
    }
}

impl Shape for BoxShape {
    fn shape_type(&self) -> &'static str {
        "Box"
    }

    fn get_volume(&self) -> f32 {
        let Vector3 { x, y, z } = self.half_extents;
        8.0 * x * y * z
    }

    fn get_inertia_tensor(&self, mass: f32) -> Matrix3 {
        // Solid cuboid: I = m/12 * (b^2 + c^2) per axis, in full dimensions
        let full = self.half_extents * 2.0;
        let (x2, y2, z2) = (full.x * full.x, full.y * full.y, full.z * full.z);
        let factor = mass / 12.0;

        Matrix3::from_diagonal(Vector3::new(
            factor * (y2 + z2),
            factor * (x2 + z2),
            factor * (x2 + y2),
        ))
    }
}
