pub mod clip;
pub mod event;
pub mod metadata;
pub mod route;
pub mod snapshot;
pub mod stream;

pub use clip::ClipRecord;
pub use event::Event;
pub use metadata::Metadata;
pub use route::{RouteConnection, RouteType};
pub use snapshot::{ProjectSnapshot, SNAPSHOT_VERSION};
pub use stream::EventStreamRecord;

use serde::{Deserialize, Serialize};

/// The three entity collections a snapshot carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Stream,
    Clip,
    Route,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Stream => "stream",
            EntityKind::Clip => "clip",
            EntityKind::Route => "route",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entity that is matched across snapshots by a stable string id.
///
/// Every collection the diff engine compares is keyed through this trait;
/// the id is the only thing used to pair an old entity with its new self.
pub trait Identified {
    /// The entity's unique id within its collection
    fn entity_id(&self) -> &str;
}

impl Identified for EventStreamRecord {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

impl Identified for ClipRecord {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

impl Identified for RouteConnection {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

impl Identified for Event {
    fn entity_id(&self) -> &str {
        &self.id
    }
}
