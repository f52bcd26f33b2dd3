//! Snapshot construction and the JSON boundary.
//!
//! - [`builder`] stamps and copies caller collections into a [`ProjectSnapshot`](crate::model::ProjectSnapshot)
//! - [`codec`] parses and emits snapshot JSON for the archive/export layer
//! - [`digest`] computes a content digest that ignores capture time

pub mod builder;
pub mod codec;
pub mod digest;

pub use builder::{create_snapshot, create_snapshot_at};
pub use codec::{parse_snapshot_bytes, snapshot_to_json};
pub use digest::semantic_digest;
