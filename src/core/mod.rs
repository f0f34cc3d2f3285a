pub mod config;
pub mod pool;
pub mod capture_zone;
pub mod swallow;
pub mod contact_pipeline;
pub mod score;
pub mod events;
pub mod session;

pub use self::config::{GameConfig, ZoneConfig, SwallowConfig, SpawnConfig, ContactConfig};
pub use self::pool::{ObjectPool, DynamicObject};
pub use self::capture_zone::{CaptureZone, Movement};
pub use self::swallow::{SwallowResolver, SwallowReport};
pub use self::contact_pipeline::{ContactPipeline, PipelineReport};
pub use self::score::Score;
pub use self::events::{EventQueue, SwallowEvent, SwallowEventKind, RemovalReason};
pub use self::session::{GameSession, TickReport};

use std::fmt;

/// Stable identifier of a slot in the [`ObjectPool`].
///
/// A handle stays valid as a key after its object is removed; lookups through
/// it simply return `None` from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectHandle(pub(crate) u32);

impl ObjectHandle {
    /// Slot index in insertion order
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
