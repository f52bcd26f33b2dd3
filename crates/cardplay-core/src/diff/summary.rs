//! Aggregate counts over a project diff.

use serde::{Deserialize, Serialize};

use crate::diff::model::{ChangeType, ProjectDiff};

/// Number of diff entries per change type for one entity kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeCounts {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl ChangeCounts {
    fn tally<I: IntoIterator<Item = ChangeType>>(change_types: I) -> Self {
        let mut counts = Self::default();
        for change_type in change_types {
            match change_type {
                ChangeType::Added => counts.added += 1,
                ChangeType::Removed => counts.removed += 1,
                ChangeType::Modified => counts.modified += 1,
            }
        }
        counts
    }

    /// Sum of the three counts
    pub fn total(&self) -> usize {
        self.added + self.removed + self.modified
    }
}

/// Aggregate view of a [`ProjectDiff`] for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSummary {
    /// Sum of all nine counts
    pub total_changes: usize,
    pub stream_changes: ChangeCounts,
    pub clip_changes: ChangeCounts,
    pub routing_changes: ChangeCounts,
}

/// Reduce a diff to per-kind, per-change-type counts.
pub fn generate_diff_summary(diff: &ProjectDiff) -> DiffSummary {
    let stream_changes = ChangeCounts::tally(diff.stream_diffs.iter().map(|d| d.change_type));
    let clip_changes = ChangeCounts::tally(diff.clip_diffs.iter().map(|d| d.change_type));
    let routing_changes = ChangeCounts::tally(diff.routing_diffs.iter().map(|d| d.change_type));

    DiffSummary {
        total_changes: stream_changes.total() + clip_changes.total() + routing_changes.total(),
        stream_changes,
        clip_changes,
        routing_changes,
    }
}
