use bitflags::bitflags;

use crate::bodies::RigidBody;
use crate::core::ZoneConfig;
use crate::math::{self, Vector3};
use crate::Result;

bitflags! {
    /// Directional input held by the player. Forward is +z, right is +x.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Movement: u8 {
        const FORWARD = 0x01;
        const BACKWARD = 0x02;
        const LEFT = 0x04;
        const RIGHT = 0x08;
    }
}

impl Movement {
    pub fn from_keys(forward: bool, backward: bool, left: bool, right: bool) -> Self {
        let mut movement = Movement::empty();
        movement.set(Movement::FORWARD, forward);
        movement.set(Movement::BACKWARD, backward);
        movement.set(Movement::LEFT, left);
        movement.set(Movement::RIGHT, right);
        movement
    }

    /// Unit (or zero) horizontal direction; opposite keys cancel out
    pub fn direction(&self) -> Vector3 {
        let axis = |positive: Movement, negative: Movement| {
            (self.contains(positive) as i8 - self.contains(negative) as i8) as f32
        };
        Vector3::new(
            axis(Movement::RIGHT, Movement::LEFT),
            0.0,
            axis(Movement::FORWARD, Movement::BACKWARD),
        )
        .normalize()
    }
}

/// The player's hole: a ground-locked disc that attracts and swallows objects
#[derive(Debug, Clone)]
pub struct CaptureZone {
    /// Kinematic body carrying the zone's transform and velocity
    body: RigidBody,

    radius: f32,

    move_speed: f32,

    /// Height the zone is pinned to
    height: f32,

    /// Arena half-width when clamping is enabled
    arena_half_width: Option<f32>,

    movement: Movement,
}

impl CaptureZone {
    pub fn new(config: &ZoneConfig) -> Result<Self> {
        config.validate()?;

        let mut zone = Self {
            body: RigidBody::new_kinematic(Vector3::zero()),
            radius: config.start_radius,
            move_speed: config.move_speed,
            height: config.height,
            arena_half_width: config.clamp_to_arena.then_some(config.arena_half_width),
            movement: Movement::empty(),
        };
        zone.set_position(config.start_position);
        Ok(zone)
    }

    /// Stores the held directions; takes effect on the next `update`
    pub fn set_movement(&mut self, forward: bool, backward: bool, left: bool, right: bool) {
        self.movement = Movement::from_keys(forward, backward, left, right);
    }

    pub fn set_movement_flags(&mut self, movement: Movement) {
        self.movement = movement;
    }

    pub fn movement(&self) -> Movement {
        self.movement
    }

    /// Velocity implied by the held directions, `move_speed` long when moving
    pub fn desired_velocity(&self) -> Vector3 {
        self.movement.direction() * self.move_speed
    }

    /// Moves the zone along its input for `dt` seconds
    pub fn update(&mut self, dt: f32) {
        let velocity = self.desired_velocity();
        let target = self.body.get_position() + velocity * dt;
        self.set_position(target);
        self.body.set_linear_velocity(velocity);
    }

    /// Teleports the zone, pinning its height and clamping it into the arena
    pub fn set_position(&mut self, position: Vector3) {
        let mut position = Vector3::new(position.x, self.height, position.z);
        if let Some(half_width) = self.arena_half_width {
            let limit = half_width - self.radius;
            position.x = math::clamp(position.x, -limit, limit);
            position.z = math::clamp(position.z, -limit, limit);
        }
        self.body.set_position(position);
        self.body.calculate_derived_data();
    }

    pub fn get_position(&self) -> Vector3 {
        self.body.get_position()
    }

    pub fn get_velocity(&self) -> Vector3 {
        self.body.get_linear_velocity()
    }

    pub fn get_radius(&self) -> f32 {
        self.radius
    }

    pub fn get_move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn set_move_speed(&mut self, speed: f32) {
        self.move_speed = speed.max(0.0);
    }

    pub fn body(&self) -> &RigidBody {
        &self.body
    }

    /// Enlarges the radius; negative amounts are ignored so the radius never shrinks
    pub fn grow(&mut self, amount: f32) {
        self.radius += amount.max(0.0);
    }

    /// Puts the zone back to its configured start state
    pub fn reset(&mut self, config: &ZoneConfig) -> Result<()> {
        *self = Self::new(config)?;
        Ok(())
    }
}
