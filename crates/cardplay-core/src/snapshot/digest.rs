//! Content digest for project snapshots.
//!
//! The semantic digest covers the three entity collections only. `version`,
//! `timestamp` and `metadata` are excluded, so re-capturing an unchanged
//! project yields the same digest.
//!
//! ## Determinism Guarantees
//!
//! - Same collections in the same order → same digest
//! - Different collection order → different digest (order-sensitive)
//! - Stable across capture times

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::errors::Result;
use crate::model::{ClipRecord, EventStreamRecord, ProjectSnapshot, RouteConnection};

#[derive(Serialize)]
struct SemanticView<'a> {
    streams: &'a [EventStreamRecord],
    clips: &'a [ClipRecord],
    routing: &'a [RouteConnection],
}

/// Compute the semantic digest of a snapshot.
///
/// ## Returns
///
/// Hex-encoded SHA256 digest (64 characters)
///
/// ## Errors
///
/// Returns `CardplayError::Serialization` if JSON serialization fails.
///
/// ## Example
///
/// ```
/// use cardplay_core::snapshot::{create_snapshot_at, semantic_digest};
///
/// let a = create_snapshot_at(&[], &[], &[], None, 1);
/// let b = create_snapshot_at(&[], &[], &[], None, 2);
/// assert_eq!(semantic_digest(&a).unwrap(), semantic_digest(&b).unwrap());
/// ```
pub fn semantic_digest(snapshot: &ProjectSnapshot) -> Result<String> {
    let view = SemanticView {
        streams: &snapshot.streams,
        clips: &snapshot.clips,
        routing: &snapshot.routing,
    };
    let canonical = serde_json::to_string(&view)?;
    Ok(hash_string(&canonical))
}

fn hash_string(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Event, Metadata};
    use crate::snapshot::create_snapshot_at;
    use serde_json::json;

    #[test]
    fn test_digest_is_hex_sha256() {
        let snapshot = create_snapshot_at(&[], &[], &[], None, 0);
        let digest = semantic_digest(&snapshot).unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_digest_ignores_timestamp_and_metadata() {
        let streams = vec![EventStreamRecord::new("s1", "Keys")];
        let mut meta = Metadata::new();
        meta.set("author", json!("carol"));

        let a = create_snapshot_at(&streams, &[], &[], None, 100);
        let b = create_snapshot_at(&streams, &[], &[], Some(meta), 200);
        assert_eq!(semantic_digest(&a).unwrap(), semantic_digest(&b).unwrap());
    }

    #[test]
    fn test_digest_sees_event_payload_changes() {
        let a = create_snapshot_at(
            &[EventStreamRecord::new("s1", "Keys")
                .with_events(vec![Event::new("e1").with_field("pitch", json!(60))])],
            &[],
            &[],
            None,
            0,
        );
        let b = create_snapshot_at(
            &[EventStreamRecord::new("s1", "Keys")
                .with_events(vec![Event::new("e1").with_field("pitch", json!(62))])],
            &[],
            &[],
            None,
            0,
        );
        assert_ne!(semantic_digest(&a).unwrap(), semantic_digest(&b).unwrap());
    }
}
