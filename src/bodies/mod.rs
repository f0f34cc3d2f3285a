mod rigid_body;
mod body_type;

pub use self::rigid_body::{RigidBody, DEFAULT_SLEEP_EPSILON};
pub use self::body_type::RigidBodyType;

/// Flags for controlling body behavior
pub mod body_flags {
    use bitflags::bitflags;

    bitflags! {
        /// Per-body simulation flags
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct BodyFlags: u32 {
            /// Body is integrated each step
            const AWAKE = 0x01;

            /// Body may fall asleep once its motion settles
            const CAN_SLEEP = 0x02;
        }
    }
}
