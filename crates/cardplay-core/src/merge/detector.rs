//! Three-way merge conflict detection.
//!
//! Both branches are diffed against the common base. An entity id that is
//! `modified` in both diffs is a conflict, whatever the final values are:
//! the detector compares which ids were touched, not what they became.
//! Additions, removals and one-sided edits never conflict. Routing
//! connections are not checked.

use std::collections::HashMap;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::diff::diff_projects_with;
use crate::diff::model::{ChangeType, ClipDiff, ProjectDiff, StreamDiff};
use crate::diff::policy::{ShallowStreamEquality, StreamEquality};
use crate::logging_facility::elapsed_ms;
use crate::merge::conflict::MergeConflict;
use crate::model::ProjectSnapshot;
use crate::{log_op_end, log_op_start};

/// Both branch diffs together with the conflicts between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeAnalysis {
    /// `base -> local`
    pub local: ProjectDiff,
    /// `base -> remote`
    pub remote: ProjectDiff,
    pub conflicts: Vec<MergeConflict>,
}

impl MergeAnalysis {
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// The local diff with the conflicts attached.
    pub fn local_with_conflicts(&self) -> ProjectDiff {
        self.local.clone().with_conflicts(self.conflicts.clone())
    }
}

/// Detect conflicts between two branches of a common base.
///
/// Stream conflicts come first, then clip conflicts, each in local diff
/// order.
pub fn detect_merge_conflicts(
    base: &ProjectSnapshot,
    local: &ProjectSnapshot,
    remote: &ProjectSnapshot,
) -> Vec<MergeConflict> {
    analyze_merge(base, local, remote).conflicts
}

/// Like [`detect_merge_conflicts`], with an explicit stream equality policy.
pub fn detect_merge_conflicts_with(
    base: &ProjectSnapshot,
    local: &ProjectSnapshot,
    remote: &ProjectSnapshot,
    policy: &dyn StreamEquality,
) -> Vec<MergeConflict> {
    analyze_merge_with(base, local, remote, policy).conflicts
}

/// Diff both branches against the base and collect their conflicts.
pub fn analyze_merge(
    base: &ProjectSnapshot,
    local: &ProjectSnapshot,
    remote: &ProjectSnapshot,
) -> MergeAnalysis {
    analyze_merge_with(base, local, remote, &ShallowStreamEquality)
}

pub fn analyze_merge_with(
    base: &ProjectSnapshot,
    local: &ProjectSnapshot,
    remote: &ProjectSnapshot,
    policy: &dyn StreamEquality,
) -> MergeAnalysis {
    let started = Instant::now();
    log_op_start!(
        "detect_merge_conflicts",
        base_timestamp = base.timestamp,
        local_timestamp = local.timestamp,
        remote_timestamp = remote.timestamp
    );

    let local_diff = diff_projects_with(base, local, policy);
    let remote_diff = diff_projects_with(base, remote, policy);

    let mut conflicts = stream_conflicts(&local_diff.stream_diffs, &remote_diff.stream_diffs);
    conflicts.extend(clip_conflicts(&local_diff.clip_diffs, &remote_diff.clip_diffs));

    log_op_end!(
        "detect_merge_conflicts",
        duration_ms = elapsed_ms(started),
        conflict_count = conflicts.len()
    );

    MergeAnalysis {
        local: local_diff,
        remote: remote_diff,
        conflicts,
    }
}

fn stream_conflicts(local: &[StreamDiff], remote: &[StreamDiff]) -> Vec<MergeConflict> {
    let remote_modified: HashMap<&str, &StreamDiff> = remote
        .iter()
        .filter(|d| d.change_type == ChangeType::Modified)
        .map(|d| (d.stream_id.as_str(), d))
        .collect();

    local
        .iter()
        .filter(|d| d.change_type == ChangeType::Modified)
        .filter_map(|l| {
            let r = remote_modified.get(l.stream_id.as_str())?;
            let local_new = l.new_stream.as_ref()?;
            let remote_new = r.new_stream.as_ref()?;
            Some(MergeConflict::stream_modified(
                &l.stream_id,
                l.old_stream.as_ref(),
                local_new,
                remote_new,
            ))
        })
        .collect()
}

fn clip_conflicts(local: &[ClipDiff], remote: &[ClipDiff]) -> Vec<MergeConflict> {
    let remote_modified: HashMap<&str, &ClipDiff> = remote
        .iter()
        .filter(|d| d.change_type == ChangeType::Modified)
        .map(|d| (d.clip_id.as_str(), d))
        .collect();

    local
        .iter()
        .filter(|d| d.change_type == ChangeType::Modified)
        .filter_map(|l| {
            let r = remote_modified.get(l.clip_id.as_str())?;
            let local_new = l.new_clip.as_ref()?;
            let remote_new = r.new_clip.as_ref()?;
            Some(MergeConflict::clip_modified(
                &l.clip_id,
                l.old_clip.as_ref(),
                local_new,
                remote_new,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::conflict::{ConflictEntity, ConflictType};
    use crate::model::{ClipRecord, Event, EventStreamRecord, RouteConnection, RouteType};
    use crate::snapshot::create_snapshot_at;

    fn streams_only(streams: &[EventStreamRecord], ts: i64) -> ProjectSnapshot {
        create_snapshot_at(streams, &[], &[], None, ts)
    }

    fn clips_only(clips: &[ClipRecord], ts: i64) -> ProjectSnapshot {
        create_snapshot_at(&[], clips, &[], None, ts)
    }

    #[test]
    fn test_identical_branches_have_no_conflicts() {
        let base = create_snapshot_at(
            &[EventStreamRecord::new("s1", "Lead")],
            &[ClipRecord::new("c1", "Intro", "s1", 960)],
            &[RouteConnection::new("r1", "s1", "out", RouteType::Audio)],
            None,
            1,
        );
        assert!(detect_merge_conflicts(&base, &base, &base).is_empty());
    }

    #[test]
    fn test_double_stream_modification_conflicts() {
        let base = streams_only(&[EventStreamRecord::new("s1", "Original")], 1);
        let local = streams_only(
            &[EventStreamRecord::new("s1", "Version 1").with_events(vec![Event::new("e1")])],
            2,
        );
        let remote = streams_only(
            &[EventStreamRecord::new("s1", "Version 2").with_events(vec![Event::new("e2")])],
            3,
        );

        let conflicts = detect_merge_conflicts(&base, &local, &remote);
        assert_eq!(conflicts.len(), 1);

        let conflict = &conflicts[0];
        assert_eq!(conflict.conflict_type, ConflictType::StreamModified);
        assert_eq!(conflict.id, "stream-conflict-s1");
        match (&conflict.local_change, &conflict.remote_change, &conflict.base_version) {
            (
                ConflictEntity::Stream(l),
                ConflictEntity::Stream(r),
                Some(ConflictEntity::Stream(b)),
            ) => {
                assert_eq!(l.name, "Version 1");
                assert_eq!(r.name, "Version 2");
                assert_eq!(b.name, "Original");
            }
            other => panic!("unexpected payloads: {other:?}"),
        }
    }

    #[test]
    fn test_independent_additions_do_not_conflict() {
        let base = streams_only(&[EventStreamRecord::new("s1", "Lead")], 1);
        let local = streams_only(
            &[EventStreamRecord::new("s1", "Lead"), EventStreamRecord::new("s2", "Bass")],
            2,
        );
        let remote = streams_only(
            &[EventStreamRecord::new("s1", "Lead"), EventStreamRecord::new("s3", "Pad")],
            3,
        );
        assert!(detect_merge_conflicts(&base, &local, &remote).is_empty());
    }

    #[test]
    fn test_identical_edits_still_conflict() {
        let base = clips_only(&[ClipRecord::new("c1", "Intro", "s1", 960)], 1);
        let edited = [ClipRecord::new("c1", "Intro", "s1", 1920)];
        let local = clips_only(&edited, 2);
        let remote = clips_only(&edited, 3);

        let conflicts = detect_merge_conflicts(&base, &local, &remote);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].conflict_type, ConflictType::ClipModified);
        assert_eq!(conflicts[0].local_change, conflicts[0].remote_change);
    }

    #[test]
    fn test_edit_versus_removal_does_not_conflict() {
        let base = clips_only(&[ClipRecord::new("c1", "Intro", "s1", 960)], 1);
        let local = clips_only(&[ClipRecord::new("c1", "Verse", "s1", 960)], 2);
        let remote = clips_only(&[], 3);
        assert!(detect_merge_conflicts(&base, &local, &remote).is_empty());
    }

    #[test]
    fn test_routing_changes_are_not_checked() {
        let base = create_snapshot_at(
            &[],
            &[],
            &[RouteConnection::new("r1", "a", "b", RouteType::Audio)],
            None,
            1,
        );
        let local = create_snapshot_at(
            &[],
            &[],
            &[RouteConnection::new("r1", "a", "c", RouteType::Audio)],
            None,
            2,
        );
        let remote = create_snapshot_at(
            &[],
            &[],
            &[RouteConnection::new("r1", "a", "d", RouteType::Midi)],
            None,
            3,
        );
        let analysis = analyze_merge(&base, &local, &remote);
        assert_eq!(analysis.local.routing_diffs.len(), 1);
        assert_eq!(analysis.remote.routing_diffs.len(), 1);
        assert!(!analysis.has_conflicts());
    }

    #[test]
    fn test_streams_before_clips() {
        let base = create_snapshot_at(
            &[EventStreamRecord::new("s1", "Lead")],
            &[ClipRecord::new("c1", "Intro", "s1", 960)],
            &[],
            None,
            1,
        );
        let local = create_snapshot_at(
            &[EventStreamRecord::new("s1", "Lead 2")],
            &[ClipRecord::new("c1", "Intro 2", "s1", 960)],
            &[],
            None,
            2,
        );
        let remote = create_snapshot_at(
            &[EventStreamRecord::new("s1", "Lead 3")],
            &[ClipRecord::new("c1", "Intro 3", "s1", 960)],
            &[],
            None,
            3,
        );

        let ids: Vec<String> = detect_merge_conflicts(&base, &local, &remote)
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["stream-conflict-s1", "clip-conflict-c1"]);
    }

    #[test]
    fn test_local_with_conflicts_sets_flag() {
        let base = streams_only(&[EventStreamRecord::new("s1", "A")], 1);
        let local = streams_only(&[EventStreamRecord::new("s1", "B")], 2);
        let remote = streams_only(&[EventStreamRecord::new("s1", "C")], 3);

        let analysis = analyze_merge(&base, &local, &remote);
        let diff = analysis.local_with_conflicts();
        assert!(diff.has_conflicts);
        assert_eq!(diff.conflicts, analysis.conflicts);
        assert!(!analysis.local.has_conflicts);
    }

    #[test]
    fn test_policy_changes_outcome() {
        use crate::diff::policy::DeepEventEquality;

        let base = streams_only(
            &[EventStreamRecord::new("s1", "Lead").with_events(vec![Event::new("e1")])],
            1,
        );
        let local = streams_only(
            &[EventStreamRecord::new("s1", "Lead").with_events(vec![Event::new("e2")])],
            2,
        );
        let remote = streams_only(
            &[EventStreamRecord::new("s1", "Lead").with_events(vec![Event::new("e3")])],
            3,
        );

        assert!(detect_merge_conflicts(&base, &local, &remote).is_empty());
        assert_eq!(
            detect_merge_conflicts_with(&base, &local, &remote, &DeepEventEquality).len(),
            1
        );
    }
}
