//! Merge conflict types.

use serde::{Deserialize, Serialize};

use crate::model::{ClipRecord, EntityKind, EventStreamRecord, RouteConnection};

/// Category of a merge conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictType {
    /// The same stream id was modified in both branches
    StreamModified,
    /// The same clip id was modified in both branches
    ClipModified,
    /// Reserved; routing conflicts are not detected
    RoutingConflict,
}

impl ConflictType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictType::StreamModified => "stream-modified",
            ConflictType::ClipModified => "clip-modified",
            ConflictType::RoutingConflict => "routing-conflict",
        }
    }
}

impl std::fmt::Display for ConflictType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity payload carried by a conflict.
///
/// Serialized without a tag: the payload is the plain entity record.
/// Variants are tried most-specific first when deserializing, since a clip
/// or route record also satisfies the stream shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConflictEntity {
    Clip(ClipRecord),
    Route(RouteConnection),
    Stream(EventStreamRecord),
}

/// A case where both branches touched the same entity id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeConflict {
    /// `"<kind>-conflict-<entityId>"`, stable across runs
    pub id: String,
    #[serde(rename = "type")]
    pub conflict_type: ConflictType,
    pub description: String,
    pub local_change: ConflictEntity,
    pub remote_change: ConflictEntity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_version: Option<ConflictEntity>,
}

impl MergeConflict {
    /// Synthesize the conflict id for an entity.
    pub fn conflict_id(kind: EntityKind, entity_id: &str) -> String {
        format!("{}-conflict-{}", kind.as_str(), entity_id)
    }

    pub fn stream_modified(
        stream_id: &str,
        base: Option<&EventStreamRecord>,
        local: &EventStreamRecord,
        remote: &EventStreamRecord,
    ) -> Self {
        Self {
            id: Self::conflict_id(EntityKind::Stream, stream_id),
            conflict_type: ConflictType::StreamModified,
            description: format!("Stream \"{}\" was modified in both versions", local.name),
            local_change: ConflictEntity::Stream(local.clone()),
            remote_change: ConflictEntity::Stream(remote.clone()),
            base_version: base.cloned().map(ConflictEntity::Stream),
        }
    }

    pub fn clip_modified(
        clip_id: &str,
        base: Option<&ClipRecord>,
        local: &ClipRecord,
        remote: &ClipRecord,
    ) -> Self {
        Self {
            id: Self::conflict_id(EntityKind::Clip, clip_id),
            conflict_type: ConflictType::ClipModified,
            description: format!("Clip \"{}\" was modified in both versions", local.name),
            local_change: ConflictEntity::Clip(local.clone()),
            remote_change: ConflictEntity::Clip(remote.clone()),
            base_version: base.cloned().map(ConflictEntity::Clip),
        }
    }

    /// Id of the conflicting entity, recovered from the local payload
    pub fn entity_id(&self) -> &str {
        match &self.local_change {
            ConflictEntity::Stream(s) => &s.id,
            ConflictEntity::Clip(c) => &c.id,
            ConflictEntity::Route(r) => &r.id,
        }
    }
}
