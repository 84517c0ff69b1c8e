//! Bounded note history
//!
//! Ordered record of emitted notes, bounded by a fixed capacity. On overflow
//! the oldest entry is evicted first, so the history always holds the most
//! recent notes in detection order. This is the artifact a renderer consumes
//! after each emission.

use crate::session::NoteEvent;

/// Capacity-bounded FIFO of emitted notes
#[derive(Debug, Clone)]
pub struct NoteHistory {
    events: Vec<NoteEvent>,
    capacity: usize,
}

impl NoteHistory {
    /// Create an empty history with the given capacity
    ///
    /// Capacity must be at least 1; the session validates this at
    /// construction.
    pub fn new(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an event, evicting the oldest first if at capacity
    pub fn push(&mut self, event: NoteEvent) {
        if self.events.len() == self.capacity {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Ordered snapshot of the retained events, oldest first
    pub fn events(&self) -> &[NoteEvent] {
        &self.events
    }

    /// Number of retained events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if no events are retained
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Maximum number of retained events
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Discard all events (session start/reset)
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
