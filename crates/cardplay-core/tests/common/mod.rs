use cardplay_core::model::{ClipRecord, Event, EventStreamRecord, ProjectSnapshot, RouteConnection};
use cardplay_core::snapshot::create_snapshot_at;

/// Stream with `count` events named `<stream_id>-e<n>`
#[allow(dead_code)]
pub fn stream_with_events(id: &str, name: &str, count: usize) -> EventStreamRecord {
    let events = (1..=count)
        .map(|n| Event::new(format!("{id}-e{n}")))
        .collect();
    EventStreamRecord::new(id, name).with_events(events)
}

/// Snapshot with a fixed timestamp so provenance assertions are stable
#[allow(dead_code)]
pub fn snapshot(
    streams: Vec<EventStreamRecord>,
    clips: Vec<ClipRecord>,
    routing: Vec<RouteConnection>,
    timestamp: i64,
) -> ProjectSnapshot {
    create_snapshot_at(&streams, &clips, &routing, None, timestamp)
}

/// Snapshot holding streams only
#[allow(dead_code)]
pub fn streams_snapshot(streams: Vec<EventStreamRecord>, timestamp: i64) -> ProjectSnapshot {
    snapshot(streams, Vec::new(), Vec::new(), timestamp)
}
