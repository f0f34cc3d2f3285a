use crate::collision::{
    CollisionData, CollisionDetector, Contact, ContactResolver, SequentialImpulseResolver,
};
use crate::core::{ContactConfig, ObjectPool};
use crate::shapes::Plane;
use crate::Result;

/// Summary of one pipeline step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineReport {
    /// Ground contacts generated this tick
    pub contacts: usize,

    /// True if the buffer filled up and some objects got no contact this tick
    pub exhausted: bool,
}

/// Per-tick ground contact generation, resolution and integration
pub struct ContactPipeline {
    data: CollisionData,

    ground: Plane,

    resolver: Box<dyn ContactResolver>,
}

impl ContactPipeline {
    pub fn new(config: &ContactConfig) -> Result<Self> {
        let resolver = SequentialImpulseResolver::new(
            config.velocity_iterations,
            config.position_iterations,
            config.restitution_velocity_threshold,
        );
        Self::with_resolver(config, Box::new(resolver))
    }

    /// Uses a custom resolver instead of the built-in sequential impulse one
    pub fn with_resolver(config: &ContactConfig, resolver: Box<dyn ContactResolver>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            data: CollisionData::new(
                config.max_contacts,
                config.friction,
                config.restitution,
                config.tolerance,
            ),
            ground: Plane::ground(config.ground_height),
            resolver,
        })
    }

    pub fn ground(&self) -> &Plane {
        &self.ground
    }

    /// Contacts generated by the last call to `generate_contacts`
    pub fn contacts(&self) -> &[Contact] {
        self.data.contacts()
    }

    /// Rebuilds the contact buffer from every live, uncaptured object.
    ///
    /// Returns true if generation stopped early because the buffer was full.
    pub fn generate_contacts(&mut self, pool: &ObjectPool) -> bool {
        let max_contacts = self.data.max_contacts();
        self.data.reset(max_contacts);

        for (handle, object) in pool.iter() {
            if object.is_being_captured() {
                continue;
            }
            if !self.data.has_more_contacts() {
                return true;
            }
            CollisionDetector::box_and_half_space(
                handle,
                object.collision_box(),
                &self.ground,
                &mut self.data,
            );
        }

        false
    }

    /// Generates contacts, resolves them, then integrates every live object by `dt`
    pub fn step(&mut self, pool: &mut ObjectPool, dt: f32) -> PipelineReport {
        let exhausted = self.generate_contacts(pool);
        let contacts = self.data.contact_count();

        if exhausted {
            tracing::trace!(contacts, "contact buffer full, remaining objects skip ground contact");
        } else {
            tracing::trace!(contacts, "generated ground contacts");
        }

        self.resolver
            .resolve_contacts(self.data.contacts_mut(), pool, dt);

        for (_, object) in pool.iter_mut() {
            object.integrate(dt);
        }

        PipelineReport { contacts, exhausted }
    }
}

impl std::fmt::Debug for ContactPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactPipeline")
            .field("data", &self.data)
            .field("ground", &self.ground)
            .finish_non_exhaustive()
    }
}
