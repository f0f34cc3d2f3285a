use rand::Rng;

use crate::bodies::RigidBody;
use crate::collision::CollisionBox;
use crate::core::{ObjectHandle, SpawnConfig};
use crate::error::GameError;
use crate::math::{Quaternion, Vector3};
use crate::shapes::Shape;
use crate::Result;

/// A spawnable box: its body, its collider and its capture flag
#[derive(Debug, Clone)]
pub struct DynamicObject {
    body: RigidBody,

    collision_box: CollisionBox,

    /// Set once the object is inside the capture threshold; excludes it from ground contact
    being_captured: bool,
}

impl DynamicObject {
    /// Creates a resting box with the body settings from `config`
    pub fn new(position: Vector3, orientation: Quaternion, half_extents: Vector3, config: &SpawnConfig) -> Self {
        let collision_box = CollisionBox::new(half_extents);

        let mut body = RigidBody::new_dynamic(position);
        body.set_rotation(orientation);
        body.set_mass(config.mass);
        body.set_inertia_tensor(collision_box.shape().get_inertia_tensor(config.mass));
        body.set_damping(config.linear_damping, config.angular_damping);
        body.set_acceleration(config.gravity);
        body.set_sleep_epsilon(config.sleep_epsilon);
        body.set_awake(true);
        body.calculate_derived_data();

        let mut object = Self {
            body,
            collision_box,
            being_captured: false,
        };
        object.calculate_internals();
        object
    }

    /// Samples a random position and size from the spawn ranges
    pub fn spawn<R: Rng + ?Sized>(config: &SpawnConfig, rng: &mut R) -> Self {
        let half_width = config.spawn_half_width;
        let position = Vector3::new(
            rng.gen_range(-half_width..=half_width),
            rng.gen_range(config.height_min..=config.height_max),
            rng.gen_range(-half_width..=half_width),
        );
        let extents = config.half_extent_min..=config.half_extent_max;
        let half_extents = Vector3::new(
            rng.gen_range(extents.clone()),
            rng.gen_range(extents.clone()),
            rng.gen_range(extents),
        );

        Self::new(position, Quaternion::identity(), half_extents, config)
    }

    pub fn body(&self) -> &RigidBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut RigidBody {
        &mut self.body
    }

    pub fn collision_box(&self) -> &CollisionBox {
        &self.collision_box
    }

    pub fn position(&self) -> Vector3 {
        self.body.get_position()
    }

    pub fn half_extents(&self) -> Vector3 {
        self.collision_box.half_extents()
    }

    pub fn is_being_captured(&self) -> bool {
        self.being_captured
    }

    /// Refreshes the collider's world-space corners from the body
    pub fn calculate_internals(&mut self) {
        self.collision_box.calculate_internals(&self.body);
    }

    /// Steps the body and refreshes the collider
    pub fn integrate(&mut self, dt: f32) {
        self.body.integrate(dt);
        self.calculate_internals();
    }
}

/// Fixed-capacity, exclusively-owning store of [`DynamicObject`]s.
///
/// Slots keep their index for the whole session; removing an object empties
/// its slot and drops its body, so stale handles resolve to `None`.
#[derive(Debug, Clone)]
pub struct ObjectPool {
    slots: Vec<Option<DynamicObject>>,

    capacity: usize,
}

impl ObjectPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live objects
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discards every object and spawns `config.object_count` fresh ones.
    ///
    /// Fails without touching the pool when the count exceeds the capacity.
    pub fn reset_all<R: Rng + ?Sized>(&mut self, config: &SpawnConfig, rng: &mut R) -> Result<()> {
        if config.object_count > self.capacity {
            tracing::error!(
                requested = config.object_count,
                capacity = self.capacity,
                "object count exceeds pool capacity"
            );
            return Err(GameError::CapacityExceeded {
                requested: config.object_count,
                capacity: self.capacity,
            });
        }

        self.slots.clear();
        self.slots
            .extend((0..config.object_count).map(|_| Some(DynamicObject::spawn(config, rng))));
        Ok(())
    }

    /// Places an object in the next unused slot
    pub fn insert(&mut self, object: DynamicObject) -> Result<ObjectHandle> {
        if self.slots.len() >= self.capacity {
            return Err(GameError::CapacityExceeded {
                requested: self.slots.len() + 1,
                capacity: self.capacity,
            });
        }
        let handle = ObjectHandle(self.slots.len() as u32);
        self.slots.push(Some(object));
        Ok(handle)
    }

    /// Handles of all live objects in insertion order
    pub fn live_handles(&self) -> Vec<ObjectHandle> {
        self.iter().map(|(handle, _)| handle).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectHandle, &DynamicObject)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|object| (ObjectHandle(i as u32), object)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ObjectHandle, &mut DynamicObject)> + '_ {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_mut().map(|object| (ObjectHandle(i as u32), object)))
    }

    pub fn get(&self, handle: ObjectHandle) -> Option<&DynamicObject> {
        self.slots.get(handle.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, handle: ObjectHandle) -> Option<&mut DynamicObject> {
        self.slots.get_mut(handle.index()).and_then(Option::as_mut)
    }

    pub fn is_alive(&self, handle: ObjectHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Removes the object and drops its body. Returns false if it was already gone.
    pub fn invalidate(&mut self, handle: ObjectHandle) -> bool {
        self.slots
            .get_mut(handle.index())
            .and_then(Option::take)
            .is_some()
    }

    /// Sets the capture flag of a live object; no-op for dead handles
    pub fn set_captured(&mut self, handle: ObjectHandle, captured: bool) {
        if let Some(object) = self.get_mut(handle) {
            object.being_captured = captured;
        }
    }
}
