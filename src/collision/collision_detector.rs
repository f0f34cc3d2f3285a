use crate::collision::{CollisionBox, CollisionData};
use crate::core::ObjectHandle;
use crate::shapes::Plane;

/// Ground contacts produced by a box resting on one face, one per bottom corner
pub const RESTING_CONTACTS_PER_BOX: usize = 4;

/// Narrow-phase tests between pooled boxes and the ground
pub struct CollisionDetector;

impl CollisionDetector {
    /// True when the box's lowest corner is within `tolerance` of the plane or below it
    pub fn box_near_half_space(collision_box: &CollisionBox, plane: &Plane, tolerance: f32) -> bool {
        collision_box
            .world_vertices()
            .iter()
            .any(|v| plane.signed_distance_to(*v) <= tolerance)
    }

    /// Adds one contact per box corner lying on or below the plane.
    ///
    /// Stops as soon as the buffer is full and returns the number of contacts added.
    pub fn box_and_half_space(
        object: ObjectHandle,
        collision_box: &CollisionBox,
        plane: &Plane,
        data: &mut CollisionData,
    ) -> usize {
        if !Self::box_near_half_space(collision_box, plane, data.tolerance) {
            return 0;
        }

        let normal = plane.get_normal();
        let mut added = 0;

        for vertex in collision_box.world_vertices() {
            let distance = plane.signed_distance_to(*vertex);
            if distance > 0.0 {
                continue;
            }

            // Contact point is the corner projected onto the surface
            let point = *vertex - normal * distance;
            if !data.add_contact(object, point, normal, -distance) {
                break;
            }
            added += 1;
        }

        added
    }
}
