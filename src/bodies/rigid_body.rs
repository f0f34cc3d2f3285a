use crate::bodies::{body_flags::BodyFlags, RigidBodyType};
use crate::math::{Vector3, Transform, Matrix3, Quaternion};

/// Default motion level below which a body is put to sleep
pub const DEFAULT_SLEEP_EPSILON: f32 = 0.3;

/// A rigid body with force/torque accumulators.
///
/// Forces added between two calls to [`RigidBody::integrate`] are applied
/// once by that call and then cleared.
#[derive(Debug, Clone)]
pub struct RigidBody {
    /// The body's transform in world space
    transform: Transform,

    linear_velocity: Vector3,

    angular_velocity: Vector3,

    /// Constant acceleration applied every step (gravity)
    acceleration: Vector3,

    body_type: RigidBodyType,

    inv_mass: f32,

    /// Inverse inertia tensor in body space
    inv_inertia_tensor: Matrix3,

    /// Inverse inertia tensor in world space, refreshed by `calculate_derived_data`
    inv_inertia_tensor_world: Matrix3,

    /// Fraction of linear velocity kept after one second
    linear_damping: f32,

    /// Fraction of angular velocity kept after one second
    angular_damping: f32,

    flags: BodyFlags,

    /// Recency-weighted kinetic activity, drives sleeping
    motion: f32,

    sleep_epsilon: f32,

    force_accum: Vector3,

    torque_accum: Vector3,
}

impl RigidBody {
    /// Creates an awake dynamic body of unit mass at `position`
    pub fn new_dynamic(position: Vector3) -> Self {
        let mut body = Self {
            transform: Transform::from_position(position),
            linear_velocity: Vector3::zero(),
            angular_velocity: Vector3::zero(),
            acceleration: Vector3::zero(),
            body_type: RigidBodyType::Dynamic,
            inv_mass: 1.0,
            inv_inertia_tensor: Matrix3::identity(),
            inv_inertia_tensor_world: Matrix3::identity(),
            linear_damping: 1.0,
            angular_damping: 1.0,
            flags: BodyFlags::CAN_SLEEP,
            motion: 0.0,
            sleep_epsilon: DEFAULT_SLEEP_EPSILON,
            force_accum: Vector3::zero(),
            torque_accum: Vector3::zero(),
        };
        body.set_awake(true);
        body.calculate_derived_data();
        body
    }

    /// Creates a kinematic body at `position`; it never reacts to forces
    pub fn new_kinematic(position: Vector3) -> Self {
        let mut body = Self::new_dynamic(position);
        body.body_type = RigidBodyType::Kinematic;
        body.inv_mass = 0.0;
        body.inv_inertia_tensor = Matrix3::zero();
        body.flags.remove(BodyFlags::CAN_SLEEP);
        body.calculate_derived_data();
        body
    }

    pub fn get_transform(&self) -> Transform {
        self.transform
    }

    pub fn get_position(&self) -> Vector3 {
        self.transform.position
    }

    pub fn set_position(&mut self, position: Vector3) {
        self.transform.position = position;
    }

    /// Moves the body by `delta` without touching its velocity
    pub fn translate(&mut self, delta: Vector3) {
        self.transform.position += delta;
    }

    pub fn get_rotation(&self) -> Quaternion {
        self.transform.rotation
    }

    pub fn set_rotation(&mut self, rotation: Quaternion) {
        self.transform.rotation = rotation;
    }

    pub fn get_linear_velocity(&self) -> Vector3 {
        self.linear_velocity
    }

    pub fn set_linear_velocity(&mut self, velocity: Vector3) {
        self.linear_velocity = velocity;
    }

    pub fn get_angular_velocity(&self) -> Vector3 {
        self.angular_velocity
    }

    pub fn set_angular_velocity(&mut self, velocity: Vector3) {
        self.angular_velocity = velocity;
    }

    pub fn get_acceleration(&self) -> Vector3 {
        self.acceleration
    }

    pub fn set_acceleration(&mut self, acceleration: Vector3) {
        self.acceleration = acceleration;
    }

    pub fn get_body_type(&self) -> RigidBodyType {
        self.body_type
    }

    /// Returns the body's mass; kinematic bodies report infinity
    pub fn get_mass(&self) -> f32 {
        if self.inv_mass > 0.0 {
            1.0 / self.inv_mass
        } else {
            f32::INFINITY
        }
    }

    /// Sets the mass of a dynamic body. Non-positive masses are ignored.
    pub fn set_mass(&mut self, mass: f32) {
        if self.body_type == RigidBodyType::Dynamic && mass > 0.0 {
            self.inv_mass = 1.0 / mass;
        }
    }

    pub fn get_inverse_mass(&self) -> f32 {
        self.inv_mass
    }

    /// Sets the body-space inertia tensor of a dynamic body
    pub fn set_inertia_tensor(&mut self, tensor: Matrix3) {
        if self.body_type != RigidBodyType::Dynamic {
            return;
        }
        if let Some(inv) = tensor.inverse() {
            self.inv_inertia_tensor = inv;
            self.calculate_derived_data();
        }
    }

    pub fn get_inverse_inertia_tensor_world(&self) -> &Matrix3 {
        &self.inv_inertia_tensor_world
    }

    /// Sets linear and angular damping, each clamped to `[0, 1]`
    pub fn set_damping(&mut self, linear: f32, angular: f32) {
        self.linear_damping = linear.clamp(0.0, 1.0);
        self.angular_damping = angular.clamp(0.0, 1.0);
    }

    pub fn get_linear_damping(&self) -> f32 {
        self.linear_damping
    }

    pub fn get_angular_damping(&self) -> f32 {
        self.angular_damping
    }

    pub fn is_awake(&self) -> bool {
        self.flags.contains(BodyFlags::AWAKE)
    }

    /// Wakes the body up or puts it to sleep. A sleeping body has no velocity.
    pub fn set_awake(&mut self, awake: bool) {
        if awake {
            self.flags.insert(BodyFlags::AWAKE);
            // Keeps a freshly woken body from dozing off on its next step
            self.motion = self.sleep_epsilon * 2.0;
        } else {
            self.flags.remove(BodyFlags::AWAKE);
            self.linear_velocity = Vector3::zero();
            self.angular_velocity = Vector3::zero();
        }
    }

    pub fn can_sleep(&self) -> bool {
        self.flags.contains(BodyFlags::CAN_SLEEP)
    }

    pub fn set_can_sleep(&mut self, can_sleep: bool) {
        self.flags.set(BodyFlags::CAN_SLEEP, can_sleep);
        if !can_sleep && !self.is_awake() {
            self.set_awake(true);
        }
    }

    pub fn set_sleep_epsilon(&mut self, epsilon: f32) {
        self.sleep_epsilon = epsilon.max(0.0);
    }

    /// Adds a force through the centre of mass for the next integration step
    pub fn add_force(&mut self, force: Vector3) {
        if self.body_type != RigidBodyType::Dynamic {
            return;
        }
        self.force_accum += force;
        if !self.is_awake() {
            self.set_awake(true);
        }
    }

    pub fn add_torque(&mut self, torque: Vector3) {
        if self.body_type != RigidBodyType::Dynamic {
            return;
        }
        self.torque_accum += torque;
        if !self.is_awake() {
            self.set_awake(true);
        }
    }

    /// Force accumulated since the last integration step
    pub fn get_accumulated_force(&self) -> Vector3 {
        self.force_accum
    }

    pub fn get_accumulated_torque(&self) -> Vector3 {
        self.torque_accum
    }

    pub fn clear_accumulators(&mut self) {
        self.force_accum = Vector3::zero();
        self.torque_accum = Vector3::zero();
    }

    /// Instantaneous velocity change from an impulse at a world-space point
    pub fn apply_impulse_at_point(&mut self, impulse: Vector3, point: Vector3) {
        if self.body_type != RigidBodyType::Dynamic {
            return;
        }
        let arm = point - self.transform.position;
        self.linear_velocity += impulse * self.inv_mass;
        self.angular_velocity += self.inv_inertia_tensor_world.multiply_vector(arm.cross(&impulse));
    }

    /// Velocity of the material point at world-space `point`
    pub fn velocity_at_point(&self, point: Vector3) -> Vector3 {
        let arm = point - self.transform.position;
        self.linear_velocity + self.angular_velocity.cross(&arm)
    }

    /// Renormalizes the orientation and refreshes the world-space inertia tensor
    pub fn calculate_derived_data(&mut self) {
        self.transform.rotation = self.transform.rotation.normalize();

        let rotation = self.transform.rotation.to_rotation_matrix();
        self.inv_inertia_tensor_world = rotation
            .multiply_matrix(&self.inv_inertia_tensor)
            .multiply_matrix(&rotation.transpose());
    }

    /// Advances the body by `dt` seconds and clears the accumulators
    pub fn integrate(&mut self, dt: f32) {
        if self.body_type != RigidBodyType::Dynamic || !self.is_awake() {
            self.clear_accumulators();
            return;
        }

        let linear_acc = self.acceleration + self.force_accum * self.inv_mass;
        let angular_acc = self.inv_inertia_tensor_world.multiply_vector(self.torque_accum);

        self.linear_velocity += linear_acc * dt;
        self.angular_velocity += angular_acc * dt;

        self.linear_velocity *= self.linear_damping.powf(dt);
        self.angular_velocity *= self.angular_damping.powf(dt);

        self.transform.position += self.linear_velocity * dt;
        self.transform.rotation.add_scaled_vector(self.angular_velocity, dt);

        self.calculate_derived_data();
        self.clear_accumulators();

        if self.can_sleep() {
            self.update_motion(dt);
        }
    }

    fn update_motion(&mut self, dt: f32) {
        let current = self.linear_velocity.length_squared() + self.angular_velocity.length_squared();
        let bias = 0.5f32.powf(dt);
        self.motion = bias * self.motion + (1.0 - bias) * current;

        if self.motion < self.sleep_epsilon {
            self.set_awake(false);
        } else if self.motion > self.sleep_epsilon * 10.0 {
            self.motion = self.sleep_epsilon * 10.0;
        }
    }
}
