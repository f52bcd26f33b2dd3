//! Cardplay Core - project snapshot diff and merge-conflict engine
//!
//! This crate lets two contributors edit the same project independently and
//! reconcile their work afterwards. It provides:
//! - Immutable, timestamped project snapshots (streams, clips, routing)
//! - Per-entity-kind diffs (added / removed / modified) keyed by entity id
//! - Three-way merge conflict detection against a common base snapshot
//! - Aggregate change summaries and a Markdown review report
//! - Opt-in snapshot validation and a JSON boundary for the archive layer
//!
//! The diff and conflict operations are pure functions over value types;
//! they perform no I/O and never fail.

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod merge;
pub mod model;
pub mod rules;
pub mod snapshot;

// Re-export commonly used types
pub use diff::{
    diff_projects, diff_projects_with, generate_diff_summary, render_human_summary, DiffSummary,
    ProjectDiff,
};
pub use errors::{CardplayError, ExError, ExErrorKind, Result};
pub use merge::{
    analyze_merge, detect_merge_conflicts, detect_merge_conflicts_with, MergeAnalysis,
    MergeConflict,
};
pub use model::{ClipRecord, Event, EventStreamRecord, ProjectSnapshot, RouteConnection, RouteType};
pub use snapshot::{create_snapshot, create_snapshot_at};
