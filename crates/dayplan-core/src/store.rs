//! In-memory ordered event collection.

use tracing::debug;

use crate::event::Event;
use crate::types::{Label, ValidationError};

/// Ordered collection of events for one interactive session.
///
/// Insertion order is semantically meaningful: later events override earlier
/// ones wherever they overlap on the timeline. The store is an explicit
/// instance owned by the session loop, never process-wide state, so separate
/// sessions stay isolated.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a new event, returning a copy of it.
    ///
    /// On failure the store is left unchanged; there is no partial append.
    /// No cap on the number of events and no duplicate detection.
    pub fn add(
        &mut self,
        label: impl Into<String>,
        start_minute: u16,
        end_minute: u16,
    ) -> Result<Event, ValidationError> {
        let label = Label::new(label)?;
        let event = Event::new(label, start_minute, end_minute)?;
        debug!(label = %event.label(), start_minute, end_minute, "event added");
        self.events.push(event.clone());
        Ok(event)
    }

    /// Returns the events in insertion order.
    pub fn list(&self) -> &[Event] {
        &self.events
    }

    /// Removes all events unconditionally.
    ///
    /// Confirmation, if any, is a concern of the presentation layer.
    pub fn clear(&mut self) {
        debug!(count = self.events.len(), "store cleared");
        self.events.clear();
    }

    /// Number of events currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the store holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
