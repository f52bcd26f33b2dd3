use serde::{Deserialize, Serialize};

use super::clip::ClipRecord;
use super::metadata::Metadata;
use super::route::RouteConnection;
use super::stream::EventStreamRecord;

/// Version stamped on every snapshot built by this engine
pub const SNAPSHOT_VERSION: &str = "1.0";

/// ProjectSnapshot - an immutable capture of project state at one moment
///
/// A snapshot owns its collections. Entities inside it are plain values, so a
/// snapshot can be kept around and diffed later without any risk of the
/// caller's live project mutating it underneath.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    /// Snapshot format version (always [`SNAPSHOT_VERSION`] for built snapshots)
    pub version: String,

    /// Capture time, milliseconds since the Unix epoch
    pub timestamp: i64,

    /// Event streams in source-collection order
    pub streams: Vec<EventStreamRecord>,

    /// Clips in source-collection order
    pub clips: Vec<ClipRecord>,

    /// Routing connections in source-collection order
    pub routing: Vec<RouteConnection>,

    /// Optional free-form metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl ProjectSnapshot {
    /// Total number of entities across all three collections
    pub fn entity_count(&self) -> usize {
        self.streams.len() + self.clips.len() + self.routing.len()
    }
}
