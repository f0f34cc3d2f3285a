pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;
pub mod collision;

/// Re-export common types for easier usage
pub use crate::core::{
    CaptureZone, GameConfig, GameSession, ObjectHandle, ObjectPool, Score, SwallowResolver,
    TickReport,
};
pub use crate::bodies::{RigidBody, RigidBodyType};
pub use crate::math::Vector3;

/// Error types for the game core
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum GameError {
        #[error("Invalid configuration: {0}")]
        InvalidConfig(String),

        #[error("Pool capacity exceeded: {requested} objects requested, capacity is {capacity}")]
        CapacityExceeded { requested: usize, capacity: usize },
    }
}

/// Result type for game core operations
pub type Result<T> = std::result::Result<T, error::GameError>;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
