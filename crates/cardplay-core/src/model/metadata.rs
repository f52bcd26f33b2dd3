use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-form snapshot metadata (author, project title, export tool, ...)
///
/// Serializes as a plain JSON object. Keys are kept sorted so that two
/// snapshots with the same metadata serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Metadata {
    data: BTreeMap<String, serde_json::Value>,
}

impl Metadata {
    /// Create a new empty Metadata instance
    pub fn new() -> Self {
        Self {
            data: BTreeMap::new(),
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    /// Set a value by key
    pub fn set(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.data.insert(key.into(), value);
    }

    /// Check if a key exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Get the number of metadata entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if metadata is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<BTreeMap<String, serde_json::Value>> for Metadata {
    fn from(data: BTreeMap<String, serde_json::Value>) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metadata_is_a_plain_object_on_the_wire() {
        let mut meta = Metadata::new();
        meta.set("author", json!("alice"));
        assert_eq!(serde_json::to_value(&meta).unwrap(), json!({"author": "alice"}));
    }

    #[test]
    fn test_metadata_accessors() {
        let mut meta = Metadata::new();
        assert!(meta.is_empty());
        meta.set("title", json!("Demo"));
        assert!(meta.contains_key("title"));
        assert_eq!(meta.len(), 1);
        assert_eq!(meta.get("title"), Some(&json!("Demo")));
    }
}
