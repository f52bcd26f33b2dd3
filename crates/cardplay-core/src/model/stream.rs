use serde::{Deserialize, Serialize};

use super::event::Event;

/// EventStreamRecord - a named, ordered collection of timed events
///
/// Streams hold the project's musical and automation data. They are owned by
/// the event store; the diff engine only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventStreamRecord {
    /// Unique identifier for this stream
    pub id: String,

    /// Human-readable stream name
    pub name: String,

    /// Events in stream order; each carries a stable id
    #[serde(default)]
    pub events: Vec<Event>,
}

impl EventStreamRecord {
    /// Create a new stream with no events
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            events: Vec::new(),
        }
    }

    /// Builder-style event list
    pub fn with_events(mut self, events: Vec<Event>) -> Self {
        self.events = events;
        self
    }

    /// Number of events in the stream
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Iterate the event ids in stream order
    pub fn event_ids(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(|e| e.id.as_str())
    }
}
