use std::collections::HashSet;

use crate::model::{Identified, ProjectSnapshot};

/// Ids that occur more than once in a collection, each reported once in
/// order of its second occurrence
pub fn find_duplicate_ids<T: Identified>(entities: &[T]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for entity in entities {
        let id = entity.entity_id();
        if !seen.insert(id) && reported.insert(id) {
            duplicates.push(id.to_string());
        }
    }
    duplicates
}

/// Find duplicate event ids inside each stream
///
/// Returns `(stream_id, event_id)` pairs.
pub fn find_duplicate_event_ids(snapshot: &ProjectSnapshot) -> Vec<(String, String)> {
    snapshot
        .streams
        .iter()
        .flat_map(|stream| {
            find_duplicate_ids(&stream.events)
                .into_iter()
                .map(move |event_id| (stream.id.clone(), event_id))
        })
        .collect()
}

/// Find clips whose `stream_id` names no stream in the snapshot
///
/// Returns `(clip_id, stream_id)` pairs.
pub fn find_dangling_clip_streams(snapshot: &ProjectSnapshot) -> Vec<(String, String)> {
    let stream_ids: HashSet<&str> = snapshot.streams.iter().map(|s| s.id.as_str()).collect();

    snapshot
        .clips
        .iter()
        .filter(|clip| !stream_ids.contains(clip.stream_id.as_str()))
        .map(|clip| (clip.id.clone(), clip.stream_id.clone()))
        .collect()
}

/// Find routes whose source and target are the same point
///
/// Returns `(connection_id, point_id)` pairs.
pub fn find_self_routes(snapshot: &ProjectSnapshot) -> Vec<(String, String)> {
    snapshot
        .routing
        .iter()
        .filter(|route| route.source_id == route.target_id)
        .map(|route| (route.id.clone(), route.source_id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClipRecord, Event, EventStreamRecord, RouteConnection, RouteType};
    use crate::snapshot::create_snapshot_at;

    #[test]
    fn test_duplicate_ids_reported_once() {
        let streams = vec![
            EventStreamRecord::new("s1", "A"),
            EventStreamRecord::new("s2", "B"),
            EventStreamRecord::new("s1", "C"),
            EventStreamRecord::new("s1", "D"),
        ];
        assert_eq!(find_duplicate_ids(&streams), vec!["s1".to_string()]);
    }

    #[test]
    fn test_duplicate_event_ids_are_per_stream() {
        let snapshot = create_snapshot_at(
            &[
                EventStreamRecord::new("s1", "A").with_events(vec![Event::new("e1"), Event::new("e1")]),
                // Same event id in a different stream is fine
                EventStreamRecord::new("s2", "B").with_events(vec![Event::new("e1")]),
            ],
            &[],
            &[],
            None,
            0,
        );
        assert_eq!(
            find_duplicate_event_ids(&snapshot),
            vec![("s1".to_string(), "e1".to_string())]
        );
    }

    #[test]
    fn test_dangling_clip_streams() {
        let snapshot = create_snapshot_at(
            &[EventStreamRecord::new("s1", "A")],
            &[
                ClipRecord::new("c1", "ok", "s1", 10),
                ClipRecord::new("c2", "bad", "s9", 10),
            ],
            &[],
            None,
            0,
        );
        assert_eq!(
            find_dangling_clip_streams(&snapshot),
            vec![("c2".to_string(), "s9".to_string())]
        );
    }

    #[test]
    fn test_self_routes() {
        let snapshot = create_snapshot_at(
            &[],
            &[],
            &[
                RouteConnection::new("r1", "a", "b", RouteType::Audio),
                RouteConnection::new("r2", "c", "c", RouteType::Modulation),
            ],
            None,
            0,
        );
        assert_eq!(
            find_self_routes(&snapshot),
            vec![("r2".to_string(), "c".to_string())]
        );
    }
}
