use crate::math::Matrix3;
use std::fmt::Debug;

/// Mass-property interface of a collision shape
pub trait Shape: Send + Sync + Debug {
    /// Returns the type name of the shape
    fn shape_type(&self) -> &'static str;

    /// Returns the volume of the shape
    fn get_volume(&self) -> f32;

    /// Returns the body-space inertia tensor for the given mass
    fn get_inertia_tensor(&self, mass: f32) -> Matrix3;
}
