//! Snapshot builder.
//!
//! Snapshots copy the caller's collections element-wise. Entities are cloned
//! as values, so later edits to the live project never leak into a snapshot
//! that is already built.

use chrono::Utc;

use crate::model::{
    ClipRecord, EventStreamRecord, Metadata, ProjectSnapshot, RouteConnection, SNAPSHOT_VERSION,
};

/// Capture project state as a new snapshot stamped with the current time.
///
/// Always stamps `version = "1.0"`. Never fails.
///
/// # Example
///
/// ```
/// use cardplay_core::model::{ClipRecord, EventStreamRecord};
/// use cardplay_core::create_snapshot;
///
/// let streams = vec![EventStreamRecord::new("s1", "Drums")];
/// let clips = vec![ClipRecord::new("c1", "Beat", "s1", 960)];
/// let snapshot = create_snapshot(&streams, &clips, &[], None);
/// assert_eq!(snapshot.version, "1.0");
/// assert_eq!(snapshot.streams.len(), 1);
/// ```
pub fn create_snapshot(
    streams: &[EventStreamRecord],
    clips: &[ClipRecord],
    routing: &[RouteConnection],
    metadata: Option<Metadata>,
) -> ProjectSnapshot {
    create_snapshot_at(
        streams,
        clips,
        routing,
        metadata,
        Utc::now().timestamp_millis(),
    )
}

/// Capture project state with an explicit timestamp (ms since epoch).
///
/// Used when re-hydrating a snapshot whose capture time is already known,
/// and by tests that need stable provenance fields.
pub fn create_snapshot_at(
    streams: &[EventStreamRecord],
    clips: &[ClipRecord],
    routing: &[RouteConnection],
    metadata: Option<Metadata>,
    timestamp: i64,
) -> ProjectSnapshot {
    let snapshot = ProjectSnapshot {
        version: SNAPSHOT_VERSION.to_string(),
        timestamp,
        streams: streams.to_vec(),
        clips: clips.to_vec(),
        routing: routing.to_vec(),
        metadata,
    };

    tracing::debug!(
        op = "create_snapshot",
        timestamp,
        streams = snapshot.streams.len(),
        clips = snapshot.clips.len(),
        routes = snapshot.routing.len(),
        entities = snapshot.entity_count(),
        "snapshot captured"
    );

    snapshot
}
