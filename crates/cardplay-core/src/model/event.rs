use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single timed event inside a stream (note, automation point, ...)
///
/// Only the `id` is interpreted by the engine. Every other field the
/// event store attaches is kept verbatim in `fields` and round-trips through
/// JSON unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier of this event within its stream
    pub id: String,

    /// Opaque event payload (start, duration, kind, payload, ...)
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl Event {
    /// Create an event with an id and no payload
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style payload field
    pub fn with_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Get a payload field by key
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_payload_flattens_on_the_wire() {
        let event = Event::new("e1")
            .with_field("start", json!(480))
            .with_field("kind", json!("note"));

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value, json!({"id": "e1", "start": 480, "kind": "note"}));
    }

    #[test]
    fn test_event_with_only_id_deserializes() {
        let event: Event = serde_json::from_value(json!({"id": "e2"})).unwrap();
        assert_eq!(event.id, "e2");
        assert!(event.fields.is_empty());
    }

    #[test]
    fn test_event_field_lookup() {
        let event = Event::new("e3").with_field("pitch", json!(60));
        assert_eq!(event.field("pitch"), Some(&json!(60)));
        assert_eq!(event.field("velocity"), None);
    }
}
