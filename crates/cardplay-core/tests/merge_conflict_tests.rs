//! Three-way merge conflict scenarios.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use cardplay_core::merge::{ConflictEntity, ConflictType};
use cardplay_core::model::{ClipRecord, Event, EventStreamRecord};
use cardplay_core::{analyze_merge, detect_merge_conflicts, render_human_summary};
use common::{snapshot, stream_with_events, streams_snapshot};
use serde_json::json;

#[test]
fn test_no_conflict_on_identical_branches() {
    let base = snapshot(
        vec![stream_with_events("s1", "Lead", 3)],
        vec![ClipRecord::new("c1", "Hook", "s1", 960)],
        vec![],
        1,
    );
    assert!(detect_merge_conflicts(&base, &base, &base).is_empty());
}

#[test]
fn test_conflict_on_double_modification() {
    let base = streams_snapshot(vec![EventStreamRecord::new("s1", "Original")], 1);
    let local = streams_snapshot(
        vec![EventStreamRecord::new("s1", "Version 1").with_events(vec![Event::new("e1")])],
        2,
    );
    let remote = streams_snapshot(
        vec![EventStreamRecord::new("s1", "Version 2").with_events(vec![Event::new("e2")])],
        3,
    );

    let conflicts = detect_merge_conflicts(&base, &local, &remote);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].conflict_type, ConflictType::StreamModified);
    assert!(conflicts[0].id.contains("s1"));

    let value = serde_json::to_value(&conflicts[0]).unwrap();
    assert_eq!(value["type"], json!("stream-modified"));
    assert_eq!(value["localChange"]["events"][0]["id"], json!("e1"));
    assert_eq!(value["remoteChange"]["events"][0]["id"], json!("e2"));
    assert_eq!(value["baseVersion"]["events"], json!([]));
}

#[test]
fn test_independent_edits_do_not_conflict() {
    let base = streams_snapshot(vec![stream_with_events("s1", "Lead", 1)], 1);
    let local = streams_snapshot(
        vec![
            stream_with_events("s1", "Lead", 1),
            stream_with_events("s2", "Bass", 2),
        ],
        2,
    );
    let remote = streams_snapshot(
        vec![
            stream_with_events("s1", "Lead", 1),
            stream_with_events("s3", "Pad", 2),
        ],
        3,
    );

    assert!(detect_merge_conflicts(&base, &local, &remote).is_empty());
}

#[test]
fn test_different_entities_modified_do_not_conflict() {
    let base = snapshot(
        vec![],
        vec![
            ClipRecord::new("c1", "A", "s1", 100),
            ClipRecord::new("c2", "B", "s1", 100),
        ],
        vec![],
        1,
    );
    let local = snapshot(
        vec![],
        vec![
            ClipRecord::new("c1", "A2", "s1", 100),
            ClipRecord::new("c2", "B", "s1", 100),
        ],
        vec![],
        2,
    );
    let remote = snapshot(
        vec![],
        vec![
            ClipRecord::new("c1", "A", "s1", 100),
            ClipRecord::new("c2", "B", "s1", 200),
        ],
        vec![],
        3,
    );

    assert!(detect_merge_conflicts(&base, &local, &remote).is_empty());
}

#[test]
fn test_clip_conflict_carries_base_version() {
    let base = snapshot(vec![], vec![ClipRecord::new("c1", "Hook", "s1", 960)], vec![], 1);
    let local = snapshot(
        vec![],
        vec![ClipRecord::new("c1", "Hook", "s1", 960).with_loop(true)],
        vec![],
        2,
    );
    let remote = snapshot(
        vec![],
        vec![ClipRecord::new("c1", "Hook", "s1", 960).with_color("#123456")],
        vec![],
        3,
    );

    let conflicts = detect_merge_conflicts(&base, &local, &remote);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].id, "clip-conflict-c1");
    match &conflicts[0].base_version {
        Some(ConflictEntity::Clip(clip)) => assert!(!clip.loop_enabled && clip.color.is_empty()),
        other => panic!("expected clip base version, got {other:?}"),
    }
}

#[test]
fn test_conflict_ids_are_stable_across_runs() {
    let base = streams_snapshot(vec![stream_with_events("s1", "A", 1)], 1);
    let local = streams_snapshot(vec![stream_with_events("s1", "B", 1)], 2);
    let remote = streams_snapshot(vec![stream_with_events("s1", "C", 1)], 3);

    let first = detect_merge_conflicts(&base, &local, &remote);
    let second = detect_merge_conflicts(&base, &local, &remote);
    assert_eq!(first, second);
    assert_eq!(first[0].id, "stream-conflict-s1");
}

#[test]
fn test_analysis_feeds_review_summary() {
    let base = streams_snapshot(vec![stream_with_events("s1", "A", 1)], 1);
    let local = streams_snapshot(vec![stream_with_events("s1", "B", 1)], 2);
    let remote = streams_snapshot(vec![stream_with_events("s1", "C", 1)], 3);

    let analysis = analyze_merge(&base, &local, &remote);
    assert!(analysis.has_conflicts());

    let diff = analysis.local_with_conflicts();
    assert!(diff.has_conflicts);
    assert_eq!(diff.conflicts.len(), 1);

    let summary = render_human_summary(&diff);
    assert!(summary.contains("Merge Conflicts (1)"));
}
