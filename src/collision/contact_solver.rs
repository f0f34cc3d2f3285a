use crate::collision::Contact;
use crate::core::ObjectPool;
use crate::math::Vector3;

/// Penetration below which a contact is treated as already resolved
const PENETRATION_SLOP: f32 = 1.0e-3;

/// Trait for ground-contact resolvers
pub trait ContactResolver {
    /// Adjusts the velocities and positions of the bodies referenced by
    /// `contacts` so that they approximately satisfy non-penetration,
    /// friction and restitution.
    fn resolve_contacts(&mut self, contacts: &mut [Contact], pool: &mut ObjectPool, dt: f32);
}

/// Sequential impulse resolver for contacts against static geometry
#[derive(Debug, Clone)]
pub struct SequentialImpulseResolver {
    velocity_iterations: u32,

    position_iterations: u32,

    /// Closing speeds below this bounce with zero restitution
    restitution_threshold: f32,
}

impl SequentialImpulseResolver {
    pub fn new(velocity_iterations: u32, position_iterations: u32, restitution_threshold: f32) -> Self {
        Self {
            velocity_iterations,
            position_iterations,
            restitution_threshold,
        }
    }

    /// Pushes bodies out of the ground, deepest contact first.
    ///
    /// Each iteration fixes one body, so the budget grows to two iterations
    /// per contact when that exceeds the configured count.
    fn solve_positions(&self, contacts: &mut [Contact], pool: &mut ObjectPool) {
        let iterations = (self.position_iterations as usize).max(contacts.len() * 2);
        for _ in 0..iterations {
            let deepest = contacts
                .iter()
                .enumerate()
                .filter(|(_, c)| c.penetration > PENETRATION_SLOP)
                .max_by(|(_, a), (_, b)| a.penetration.total_cmp(&b.penetration))
                .map(|(i, _)| i);

            let Some(index) = deepest else {
                break;
            };

            let contact = contacts[index];
            let Some(object) = pool.get_mut(contact.object) else {
                contacts[index].penetration = 0.0;
                continue;
            };

            let delta = contact.normal * contact.penetration;
            object.body_mut().translate(delta);

            // Sibling contacts on the same body move with it
            for other in contacts.iter_mut().filter(|c| c.object == contact.object) {
                other.penetration -= delta.dot(&other.normal);
                other.point += delta;
            }
        }
    }

    fn solve_velocities(&self, contacts: &[Contact], pool: &mut ObjectPool) {
        for _ in 0..self.velocity_iterations {
            for contact in contacts {
                let Some(object) = pool.get_mut(contact.object) else {
                    continue;
                };
                let body = object.body_mut();
                if !body.is_awake() {
                    continue;
                }

                let normal = contact.normal;
                let relative_velocity = body.velocity_at_point(contact.point);
                let normal_velocity = relative_velocity.dot(&normal);

                // Separating already
                if normal_velocity >= 0.0 {
                    continue;
                }

                let arm = contact.point - body.get_position();
                let inv_inertia = *body.get_inverse_inertia_tensor_world();
                let inv_mass = body.get_inverse_mass();

                let effective_mass = |direction: Vector3| {
                    let arm_cross = arm.cross(&direction);
                    inv_mass + arm_cross.dot(&inv_inertia.multiply_vector(arm_cross))
                };

                let normal_mass = effective_mass(normal);
                if normal_mass <= 0.0 {
                    continue;
                }

                let restitution = if -normal_velocity < self.restitution_threshold {
                    0.0
                } else {
                    contact.restitution
                };

                let j_n = -(1.0 + restitution) * normal_velocity / normal_mass;
                let mut impulse = normal * j_n;

                // Coulomb friction against the sliding direction
                let tangent_velocity = relative_velocity - normal * normal_velocity;
                let sliding_speed = tangent_velocity.length();
                if sliding_speed > crate::math::EPSILON {
                    let tangent = tangent_velocity / sliding_speed;
                    let tangent_mass = effective_mass(tangent);
                    if tangent_mass > 0.0 {
                        let j_t = (sliding_speed / tangent_mass).min(contact.friction * j_n);
                        impulse -= tangent * j_t;
                    }
                }

                body.apply_impulse_at_point(impulse, contact.point);
            }
        }
    }
}

impl Default for SequentialImpulseResolver {
    fn default() -> Self {
        Self::new(8, 8, 0.5)
    }
}

impl ContactResolver for SequentialImpulseResolver {
    fn resolve_contacts(&mut self, contacts: &mut [Contact], pool: &mut ObjectPool, _dt: f32) {
        if contacts.is_empty() {
            return;
        }
        self.solve_positions(contacts, pool);
        self.solve_velocities(contacts, pool);
    }
}
