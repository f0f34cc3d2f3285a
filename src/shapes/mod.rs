mod shape;
pub mod box_shape;
mod plane;

pub use self::shape::Shape;
pub use self::box_shape::BoxShape;
pub use self::plane::Plane;
