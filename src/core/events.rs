use crate::core::ObjectHandle;
use crate::math::Vector3;
use std::collections::VecDeque;

/// Why an object left the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalReason {
    /// Reached the centre of the capture zone
    Swallowed,

    /// Dropped below the world floor
    FellOffWorld,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwallowEventKind {
    /// The object crossed the capture threshold and lost ground contact
    Captured,

    /// The object was removed and scored
    Removed(RemovalReason),
}

/// Something that happened to a pooled object during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwallowEvent {
    pub kind: SwallowEventKind,

    pub object: ObjectHandle,

    /// Where the object was when the event fired
    pub position: Vector3,
}

/// A FIFO queue of swallow events, for sound and UI hooks
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<SwallowEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: SwallowEvent) {
        self.events.push_back(event);
    }

    /// Gets the oldest event from the queue
    pub fn next_event(&mut self) -> Option<SwallowEvent> {
        self.events.pop_front()
    }

    /// Takes every queued event, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = SwallowEvent> + '_ {
        self.events.drain(..)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SwallowEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
