//! Project snapshot diff engine.
//!
//! Compares two project snapshots entity kind by entity kind and produces a
//! [`ProjectDiff`] of added, removed and modified streams, clips and routing
//! connections.
//!
//! ## Entry point
//!
//! ```
//! use cardplay_core::diff::{diff_projects, generate_diff_summary};
//! use cardplay_core::model::EventStreamRecord;
//! use cardplay_core::snapshot::create_snapshot_at;
//!
//! let old = create_snapshot_at(&[], &[], &[], None, 1);
//! let new = create_snapshot_at(&[EventStreamRecord::new("s1", "Drums")], &[], &[], None, 2);
//! let diff = diff_projects(&old, &new);
//! assert_eq!(generate_diff_summary(&diff).total_changes, 1);
//! ```
//!
//! ## Guarantees
//!
//! - **Identity matching**: entities pair up by id only; position is irrelevant.
//! - **One entry per id**: an id is added, removed, modified or absent, never two of these.
//! - **No conflicts**: a two-way diff never carries conflicts; see [`crate::merge`].
//! - **Coarse streams by default**: stream equality looks at id, name and event
//!   count; see [`policy`] for the content-sensitive alternative.
//!
//! Entry order follows the input collections (additions and modifications in
//! new-snapshot order, then removals in old-snapshot order). Callers must not
//! depend on it across independently ordered snapshots.

pub mod engine;
pub mod entity;
pub mod human_summary;
pub mod model;
pub mod policy;
pub mod summary;

pub use engine::{diff_projects, diff_projects_with};
pub use human_summary::render_human_summary;
pub use model::{
    ChangeType, ClipDiff, ClipField, EventChanges, ProjectDiff, RoutingDiff, StreamDiff,
};
pub use policy::{DeepEventEquality, ShallowStreamEquality, StreamEquality};
pub use summary::{generate_diff_summary, ChangeCounts, DiffSummary};
