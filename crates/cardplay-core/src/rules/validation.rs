use crate::errors::{CardplayError, Result};
use crate::model::{EntityKind, ProjectSnapshot};

use super::invariants;

/// Collect every structural problem in a snapshot
///
/// The diff and merge operations accept any snapshot; this check is for
/// callers that want to reject malformed input before diffing it. Checks run
/// in a fixed order:
///
/// 1. Duplicate stream, clip and route ids
/// 2. Duplicate event ids inside one stream
/// 3. Clips referencing a stream that is not in the snapshot
/// 4. Routes connecting a point to itself
pub fn validate_snapshot(snapshot: &ProjectSnapshot) -> Vec<CardplayError> {
    let mut issues = Vec::new();

    let duplicate_ids = [
        (EntityKind::Stream, invariants::find_duplicate_ids(&snapshot.streams)),
        (EntityKind::Clip, invariants::find_duplicate_ids(&snapshot.clips)),
        (EntityKind::Route, invariants::find_duplicate_ids(&snapshot.routing)),
    ];
    for (kind, ids) in duplicate_ids {
        issues.extend(ids.into_iter().map(|id| CardplayError::DuplicateId { kind, id }));
    }

    issues.extend(
        invariants::find_duplicate_event_ids(snapshot)
            .into_iter()
            .map(|(stream_id, event_id)| CardplayError::DuplicateEventId {
                stream_id,
                event_id,
            }),
    );

    issues.extend(
        invariants::find_dangling_clip_streams(snapshot)
            .into_iter()
            .map(|(clip_id, stream_id)| CardplayError::DanglingStreamReference {
                clip_id,
                stream_id,
            }),
    );

    issues.extend(
        invariants::find_self_routes(snapshot)
            .into_iter()
            .map(|(connection_id, point_id)| CardplayError::SelfRoute {
                connection_id,
                point_id,
            }),
    );

    issues
}

/// Validate a snapshot, failing on the first problem
///
/// # Errors
/// Returns the first issue [`validate_snapshot`] would report.
pub fn ensure_valid(snapshot: &ProjectSnapshot) -> Result<()> {
    match validate_snapshot(snapshot).into_iter().next() {
        Some(issue) => Err(issue),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClipRecord, EventStreamRecord, RouteConnection, RouteType};
    use crate::snapshot::create_snapshot_at;

    #[test]
    fn test_valid_snapshot_has_no_issues() {
        let snapshot = create_snapshot_at(
            &[EventStreamRecord::new("s1", "Lead")],
            &[ClipRecord::new("c1", "Intro", "s1", 960)],
            &[RouteConnection::new("r1", "s1", "master", RouteType::Audio)],
            None,
            0,
        );
        assert!(validate_snapshot(&snapshot).is_empty());
        assert!(ensure_valid(&snapshot).is_ok());
    }

    #[test]
    fn test_issues_are_reported_in_check_order() {
        let snapshot = create_snapshot_at(
            &[EventStreamRecord::new("s1", "A"), EventStreamRecord::new("s1", "B")],
            &[ClipRecord::new("c1", "Intro", "missing", 960)],
            &[RouteConnection::new("r1", "x", "x", RouteType::Midi)],
            None,
            0,
        );

        let issues = validate_snapshot(&snapshot);
        assert_eq!(
            issues,
            vec![
                CardplayError::DuplicateId {
                    kind: EntityKind::Stream,
                    id: "s1".to_string()
                },
                CardplayError::DanglingStreamReference {
                    clip_id: "c1".to_string(),
                    stream_id: "missing".to_string()
                },
                CardplayError::SelfRoute {
                    connection_id: "r1".to_string(),
                    point_id: "x".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_ensure_valid_returns_first_issue() {
        let snapshot = create_snapshot_at(
            &[],
            &[
                ClipRecord::new("c1", "A", "s1", 1),
                ClipRecord::new("c1", "B", "s1", 1),
            ],
            &[],
            None,
            0,
        );
        let err = ensure_valid(&snapshot).unwrap_err();
        assert_eq!(
            err,
            CardplayError::DuplicateId {
                kind: EntityKind::Clip,
                id: "c1".to_string()
            }
        );
    }
}
