/// How a rigid body takes part in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RigidBodyType {
    /// Moved by forces, gravity and contacts
    #[default]
    Dynamic,

    /// Moved programmatically only; infinite mass, ignores forces
    Kinematic,
}
