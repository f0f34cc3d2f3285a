use crate::core::ObjectHandle;
use crate::math::Vector3;

/// A single penetration between a pooled object and the static ground
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// The object touching the ground
    pub object: ObjectHandle,

    /// Contact point in world space, on the ground surface
    pub point: Vector3,

    /// Ground normal, pointing out of the ground
    pub normal: Vector3,

    /// Depth of the corner below the ground surface
    pub penetration: f32,

    pub friction: f32,

    pub restitution: f32,
}

/// Bounded per-tick contact buffer plus the coefficients stamped onto new contacts
#[derive(Debug, Clone)]
pub struct CollisionData {
    contacts: Vec<Contact>,

    max_contacts: usize,

    pub friction: f32,

    pub restitution: f32,

    /// How far above the ground a box may be and still be checked for contact
    pub tolerance: f32,
}

impl CollisionData {
    pub fn new(max_contacts: usize, friction: f32, restitution: f32, tolerance: f32) -> Self {
        Self {
            contacts: Vec::with_capacity(max_contacts),
            max_contacts,
            friction,
            restitution,
            tolerance,
        }
    }

    /// Drops every contact and sets a new capacity for this tick
    pub fn reset(&mut self, max_contacts: usize) {
        self.contacts.clear();
        self.max_contacts = max_contacts;
    }

    pub fn max_contacts(&self) -> usize {
        self.max_contacts
    }

    pub fn contacts_left(&self) -> usize {
        self.max_contacts.saturating_sub(self.contacts.len())
    }

    pub fn has_more_contacts(&self) -> bool {
        self.contacts_left() > 0
    }

    /// Appends a contact, stamping the current friction and restitution.
    /// Returns false when the buffer is already full.
    pub fn add_contact(&mut self, object: ObjectHandle, point: Vector3, normal: Vector3, penetration: f32) -> bool {
        if !self.has_more_contacts() {
            return false;
        }
        self.contacts.push(Contact {
            object,
            point,
            normal,
            penetration,
            friction: self.friction,
            restitution: self.restitution,
        });
        true
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn contacts_mut(&mut self) -> &mut [Contact] {
        &mut self.contacts
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }
}
