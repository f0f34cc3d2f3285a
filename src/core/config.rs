use crate::collision::RESTING_CONTACTS_PER_BOX;
use crate::error::GameError;
use crate::math::Vector3;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Settings for the player-controlled capture zone
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ZoneConfig {
    /// Horizontal start position; the vertical component is replaced by `height`
    pub start_position: Vector3,

    /// Fixed height the zone is pinned to
    pub height: f32,

    /// Radius at the start of a session
    pub start_radius: f32,

    /// Horizontal speed in units per second, equal along axes and diagonals
    pub move_speed: f32,

    /// Half-width of the square arena centred on the origin
    pub arena_half_width: f32,

    /// Keep the whole zone disc inside the arena
    pub clamp_to_arena: bool,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            start_position: Vector3::new(0.0, 0.1, 0.0),
            height: 0.1,
            start_radius: 7.0,
            move_speed: 10.0,
            arena_half_width: 100.0,
            clamp_to_arena: true,
        }
    }
}

impl ZoneConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.start_radius > 0.0) {
            return invalid(format!("zone start radius must be positive, got {}", self.start_radius));
        }
        if !(self.move_speed >= 0.0) {
            return invalid(format!("zone move speed must not be negative, got {}", self.move_speed));
        }
        if !(self.arena_half_width > 0.0) {
            return invalid(format!("arena half-width must be positive, got {}", self.arena_half_width));
        }
        Ok(())
    }
}

/// Tuning of the pull, capture and removal rules
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SwallowConfig {
    /// Pull force per unit of depth inside the zone radius
    pub force_scale: f32,

    /// Fraction of the radius inside which an object is flagged as captured
    pub capture_threshold: f32,

    /// Fraction of the radius inside which an object is removed
    pub remove_threshold: f32,

    /// Radius added to the zone per removed object
    pub radius_growth: f32,

    /// Objects below this height are removed wherever they are
    pub floor_removal_y: f32,

    /// Score credited per removed object
    pub score_per_removal: i64,

    /// Magnitude of the spin torque given to an object when it is captured; 0 disables it
    pub capture_spin: f32,
}

impl Default for SwallowConfig {
    fn default() -> Self {
        Self {
            force_scale: 20.0,
            capture_threshold: 0.7,
            remove_threshold: 0.1,
            radius_growth: 0.5,
            floor_removal_y: -5.0,
            score_per_removal: 1,
            capture_spin: 0.0,
        }
    }
}

impl SwallowConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.force_scale >= 0.0) {
            return invalid(format!("pull force scale must not be negative, got {}", self.force_scale));
        }
        for (name, value) in [
            ("capture threshold", self.capture_threshold),
            ("remove threshold", self.remove_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return invalid(format!("{name} must lie in [0, 1], got {value}"));
            }
        }
        if self.remove_threshold > self.capture_threshold {
            return invalid(format!(
                "remove threshold {} exceeds capture threshold {}",
                self.remove_threshold, self.capture_threshold
            ));
        }
        if !(self.radius_growth > 0.0) {
            return invalid(format!("radius growth must be positive, got {}", self.radius_growth));
        }
        if !self.floor_removal_y.is_finite() {
            return invalid("floor removal height must be finite".to_owned());
        }
        Ok(())
    }
}

/// How pooled objects are created on reset
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SpawnConfig {
    /// Number of slots in the pool
    pub pool_capacity: usize,

    /// Objects spawned on each reset
    pub object_count: usize,

    /// Objects spawn with x and z uniform in `[-spawn_half_width, spawn_half_width]`
    pub spawn_half_width: f32,

    pub height_min: f32,

    pub height_max: f32,

    /// Each half-extent is drawn independently from `[half_extent_min, half_extent_max]`
    pub half_extent_min: f32,

    pub half_extent_max: f32,

    pub mass: f32,

    /// Fraction of linear velocity kept per second
    pub linear_damping: f32,

    /// Fraction of angular velocity kept per second
    pub angular_damping: f32,

    pub gravity: Vector3,

    /// Motion level under which resting objects fall asleep; 0 keeps them awake
    pub sleep_epsilon: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            pool_capacity: 100,
            object_count: 100,
            spawn_half_width: 100.0,
            height_min: 1.0,
            height_max: 5.0,
            half_extent_min: 0.5,
            half_extent_max: 2.0,
            mass: 1.0,
            linear_damping: 0.95,
            angular_damping: 0.8,
            gravity: Vector3::new(0.0, -9.81, 0.0),
            sleep_epsilon: crate::bodies::DEFAULT_SLEEP_EPSILON,
        }
    }
}

impl SpawnConfig {
    /// Checks the ranges. Capacity overflow is reported by the pool itself.
    pub fn validate(&self) -> Result<()> {
        if self.pool_capacity == 0 {
            return invalid("pool capacity must be at least 1".to_owned());
        }
        if !(self.spawn_half_width >= 0.0) {
            return invalid(format!("spawn half-width must not be negative, got {}", self.spawn_half_width));
        }
        if !(self.height_min <= self.height_max) {
            return invalid(format!("spawn height range {}..{} is inverted", self.height_min, self.height_max));
        }
        if !(self.half_extent_min > 0.0 && self.half_extent_min <= self.half_extent_max) {
            return invalid(format!(
                "half-extent range {}..{} must be positive and ordered",
                self.half_extent_min, self.half_extent_max
            ));
        }
        if !(self.mass > 0.0) {
            return invalid(format!("object mass must be positive, got {}", self.mass));
        }
        for (name, value) in [
            ("linear damping", self.linear_damping),
            ("angular damping", self.angular_damping),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return invalid(format!("{name} must lie in [0, 1], got {value}"));
            }
        }
        Ok(())
    }
}

/// Ground-contact generation and resolution settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ContactConfig {
    /// Contact buffer size per tick; must hold four contacts for every pooled box
    pub max_contacts: usize,

    pub friction: f32,

    pub restitution: f32,

    /// Boxes whose lowest corner is higher than this above the ground skip contact generation
    pub tolerance: f32,

    /// Height of the ground plane
    pub ground_height: f32,

    pub velocity_iterations: u32,

    pub position_iterations: u32,

    /// Closing speeds below this resolve without bounce
    pub restitution_velocity_threshold: f32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            max_contacts: 512,
            friction: 0.1,
            restitution: 0.6,
            tolerance: 0.1,
            ground_height: 0.0,
            velocity_iterations: 8,
            position_iterations: 8,
            restitution_velocity_threshold: 0.5,
        }
    }
}

impl ContactConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_contacts == 0 {
            return invalid("max contacts must be at least 1".to_owned());
        }
        for (name, value) in [
            ("friction", self.friction),
            ("restitution", self.restitution),
            ("tolerance", self.tolerance),
            ("restitution velocity threshold", self.restitution_velocity_threshold),
        ] {
            if !(value >= 0.0) {
                return invalid(format!("{name} must not be negative, got {value}"));
            }
        }
        if self.restitution > 1.0 {
            return invalid(format!("restitution must not exceed 1, got {}", self.restitution));
        }
        Ok(())
    }
}

/// Full configuration of a game session
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct GameConfig {
    pub zone: ZoneConfig,

    pub swallow: SwallowConfig,

    pub spawn: SpawnConfig,

    pub contact: ContactConfig,

    /// Longest step a single tick may simulate, in seconds
    pub max_time_step: f32,

    /// Seed for object spawning; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            zone: ZoneConfig::default(),
            swallow: SwallowConfig::default(),
            spawn: SpawnConfig::default(),
            contact: ContactConfig::default(),
            max_time_step: 1.0,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        self.zone.validate()?;
        self.swallow.validate()?;
        self.spawn.validate()?;
        self.contact.validate()?;

        if !(self.max_time_step > 0.0) {
            return invalid(format!("max time step must be positive, got {}", self.max_time_step));
        }
        // Every box may rest on the ground at once
        let required = self.spawn.pool_capacity.saturating_mul(RESTING_CONTACTS_PER_BOX);
        if self.contact.max_contacts < required {
            return invalid(format!(
                "max contacts {} cannot hold resting contacts for {} objects, need at least {}",
                self.contact.max_contacts, self.spawn.pool_capacity, required
            ));
        }
        Ok(())
    }
}

fn invalid(reason: String) -> Result<()> {
    tracing::warn!(%reason, "rejecting configuration");
    Err(GameError::InvalidConfig(reason))
}
