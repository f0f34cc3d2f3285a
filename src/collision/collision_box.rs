use crate::bodies::RigidBody;
use crate::math::Vector3;
use crate::shapes::BoxShape;

/// A box collider attached to a body, with a cached world-space vertex set
#[derive(Debug, Clone)]
pub struct CollisionBox {
    shape: BoxShape,

    /// Corners in world space as of the last `calculate_internals`
    world_vertices: [Vector3; 8],
}

impl CollisionBox {
    pub fn new(half_extents: Vector3) -> Self {
        let shape = BoxShape::new(half_extents);
        Self {
            world_vertices: shape.get_vertices(),
            shape,
        }
    }

    pub fn shape(&self) -> &BoxShape {
        &self.shape
    }

    pub fn half_extents(&self) -> Vector3 {
        self.shape.get_half_extents()
    }

    /// Recomputes the world-space corners from the body's current transform
    pub fn calculate_internals(&mut self, body: &RigidBody) {
        let transform = body.get_transform();
        for (world, local) in self.world_vertices.iter_mut().zip(self.shape.get_vertices()) {
            *world = transform.transform_point(local);
        }
    }

    pub fn world_vertices(&self) -> &[Vector3; 8] {
        &self.world_vertices
    }

    /// Height of the lowest corner
    pub fn lowest_point(&self) -> f32 {
        self.world_vertices
            .iter()
            .map(|v| v.y)
            .fold(f32::INFINITY, f32::min)
    }
}
