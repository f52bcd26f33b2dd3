//! Three-way merge conflict detection.
//!
//! Given a common `base` and two independently edited branches, reports the
//! entities both branches modified. Resolution is left to the caller; the
//! stable conflict ids are meant as keys for a resolution UI.

pub mod conflict;
pub mod detector;

pub use conflict::{ConflictEntity, ConflictType, MergeConflict};
pub use detector::{
    analyze_merge, analyze_merge_with, detect_merge_conflicts, detect_merge_conflicts_with,
    MergeAnalysis,
};
