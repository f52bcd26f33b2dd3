//! Project diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq` and
//! serialize with camelCase keys so the export layer can persist them as-is.
//! `old_*`/`new_*` references are omitted from JSON when absent.

use serde::{Deserialize, Serialize};

use crate::merge::MergeConflict;
use crate::model::{ClipRecord, EventStreamRecord, RouteConnection};

/// Classification of one entity between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    /// Present only in the new snapshot
    Added,
    /// Present only in the old snapshot
    Removed,
    /// Present in both and unequal under the kind's equality rule
    Modified,
}

impl ChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Added => "added",
            ChangeType::Removed => "removed",
            ChangeType::Modified => "modified",
        }
    }
}

/// Event-id level changes inside a modified stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventChanges {
    /// Event ids only in the new stream
    pub added: usize,
    /// Event ids only in the old stream
    pub removed: usize,
    /// Event ids in both streams (every shared id under the default policy)
    pub modified: usize,
}

/// Diff entry for one event stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamDiff {
    pub change_type: ChangeType,
    pub stream_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_stream: Option<EventStreamRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_stream: Option<EventStreamRecord>,
    /// Present only for `Modified`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_changes: Option<EventChanges>,
}

impl StreamDiff {
    pub fn added(new: &EventStreamRecord) -> Self {
        Self {
            change_type: ChangeType::Added,
            stream_id: new.id.clone(),
            old_stream: None,
            new_stream: Some(new.clone()),
            event_changes: None,
        }
    }

    pub fn removed(old: &EventStreamRecord) -> Self {
        Self {
            change_type: ChangeType::Removed,
            stream_id: old.id.clone(),
            old_stream: Some(old.clone()),
            new_stream: None,
            event_changes: None,
        }
    }

    pub fn modified(
        old: &EventStreamRecord,
        new: &EventStreamRecord,
        event_changes: EventChanges,
    ) -> Self {
        Self {
            change_type: ChangeType::Modified,
            stream_id: new.id.clone(),
            old_stream: Some(old.clone()),
            new_stream: Some(new.clone()),
            event_changes: Some(event_changes),
        }
    }
}

/// Clip fields that can differ between two versions of a clip, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClipField {
    Name,
    Color,
    StreamId,
    Duration,
    Loop,
}

impl ClipField {
    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            ClipField::Name => "name",
            ClipField::Color => "color",
            ClipField::StreamId => "streamId",
            ClipField::Duration => "duration",
            ClipField::Loop => "loop",
        }
    }
}

impl std::fmt::Display for ClipField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diff entry for one clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipDiff {
    pub change_type: ChangeType,
    pub clip_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_clip: Option<ClipRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_clip: Option<ClipRecord>,
    /// Present only for `Modified`; never empty there
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changed_fields: Option<Vec<ClipField>>,
}

impl ClipDiff {
    pub fn added(new: &ClipRecord) -> Self {
        Self {
            change_type: ChangeType::Added,
            clip_id: new.id.clone(),
            old_clip: None,
            new_clip: Some(new.clone()),
            changed_fields: None,
        }
    }

    pub fn removed(old: &ClipRecord) -> Self {
        Self {
            change_type: ChangeType::Removed,
            clip_id: old.id.clone(),
            old_clip: Some(old.clone()),
            new_clip: None,
            changed_fields: None,
        }
    }

    pub fn modified(old: &ClipRecord, new: &ClipRecord, changed_fields: Vec<ClipField>) -> Self {
        Self {
            change_type: ChangeType::Modified,
            clip_id: new.id.clone(),
            old_clip: Some(old.clone()),
            new_clip: Some(new.clone()),
            changed_fields: Some(changed_fields),
        }
    }
}

/// Diff entry for one routing connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingDiff {
    pub change_type: ChangeType,
    pub connection_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_connection: Option<RouteConnection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_connection: Option<RouteConnection>,
}

impl RoutingDiff {
    pub fn added(new: &RouteConnection) -> Self {
        Self {
            change_type: ChangeType::Added,
            connection_id: new.id.clone(),
            old_connection: None,
            new_connection: Some(new.clone()),
        }
    }

    pub fn removed(old: &RouteConnection) -> Self {
        Self {
            change_type: ChangeType::Removed,
            connection_id: old.id.clone(),
            old_connection: Some(old.clone()),
            new_connection: None,
        }
    }

    pub fn modified(old: &RouteConnection, new: &RouteConnection) -> Self {
        Self {
            change_type: ChangeType::Modified,
            connection_id: new.id.clone(),
            old_connection: Some(old.clone()),
            new_connection: Some(new.clone()),
        }
    }
}

/// The top-level diff between two project snapshots.
///
/// `has_conflicts` always equals `!conflicts.is_empty()`. Diffs produced by
/// [`diff_projects`](crate::diff::diff_projects) never carry conflicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDiff {
    /// Version of the old snapshot
    pub from_version: String,
    /// Version of the new snapshot
    pub to_version: String,
    /// Capture time of the old snapshot (ms since epoch)
    pub from_timestamp: i64,
    /// Capture time of the new snapshot (ms since epoch)
    pub to_timestamp: i64,
    pub stream_diffs: Vec<StreamDiff>,
    pub clip_diffs: Vec<ClipDiff>,
    pub routing_diffs: Vec<RoutingDiff>,
    pub has_conflicts: bool,
    pub conflicts: Vec<MergeConflict>,
}

impl ProjectDiff {
    /// True when no entity of any kind changed
    pub fn is_empty(&self) -> bool {
        self.stream_diffs.is_empty() && self.clip_diffs.is_empty() && self.routing_diffs.is_empty()
    }

    /// Number of diff entries across all three kinds
    pub fn entry_count(&self) -> usize {
        self.stream_diffs.len() + self.clip_diffs.len() + self.routing_diffs.len()
    }

    /// Stream diff entry for an id, if the stream changed
    pub fn stream_diff(&self, stream_id: &str) -> Option<&StreamDiff> {
        self.stream_diffs.iter().find(|d| d.stream_id == stream_id)
    }

    /// Clip diff entry for an id, if the clip changed
    pub fn clip_diff(&self, clip_id: &str) -> Option<&ClipDiff> {
        self.clip_diffs.iter().find(|d| d.clip_id == clip_id)
    }

    /// Attach conflicts, keeping `has_conflicts` in sync
    pub fn with_conflicts(mut self, conflicts: Vec<MergeConflict>) -> Self {
        self.has_conflicts = !conflicts.is_empty();
        self.conflicts = conflicts;
        self
    }
}
