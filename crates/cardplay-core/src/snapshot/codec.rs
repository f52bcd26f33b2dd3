//! JSON boundary for snapshots.
//!
//! The archive/export layer stores snapshots as JSON documents. This module
//! decodes them with the same staged checks the rest of the engine relies on
//! and reports failures through the structured error facility.

use serde_json::Value;

use crate::errors::{ExError, ExErrorKind};
use crate::model::ProjectSnapshot;

/// Top-level keys every snapshot document must carry
const REQUIRED_FIELDS: &[&str] = &["version", "timestamp", "streams", "clips", "routing"];

/// Parse raw snapshot bytes into a [`ProjectSnapshot`].
///
/// # Errors
///
/// - `InvalidSnapshot`: bytes are not UTF-8, not JSON, the root is not an
///   object, `timestamp` is not an integer, or typed decoding fails
/// - `MissingField`: one of the required top-level keys is absent
pub fn parse_snapshot_bytes(bytes: &[u8]) -> Result<ProjectSnapshot, ExError> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        ExError::new(ExErrorKind::InvalidSnapshot)
            .with_op("parse_snapshot_bytes")
            .with_message(format!("snapshot is not valid UTF-8: {}", e))
    })?;

    let raw: Value = serde_json::from_str(text).map_err(|e| {
        ExError::new(ExErrorKind::InvalidSnapshot)
            .with_op("parse_snapshot_bytes")
            .with_message(format!("snapshot is not valid JSON: {}", e))
    })?;

    let obj = raw.as_object().ok_or_else(|| {
        ExError::new(ExErrorKind::InvalidSnapshot)
            .with_op("parse_snapshot_bytes")
            .with_message("snapshot JSON root must be an object")
    })?;

    for field in REQUIRED_FIELDS {
        if !obj.contains_key(*field) {
            return Err(ExError::new(ExErrorKind::MissingField)
                .with_op("parse_snapshot_bytes")
                .with_entity_id(*field)
                .with_message(format!("required field `{}` is absent", field)));
        }
    }

    if let Some(ts) = obj.get("timestamp") {
        if ts.as_i64().is_none() {
            return Err(ExError::new(ExErrorKind::InvalidSnapshot)
                .with_op("parse_snapshot_bytes")
                .with_message(format!("`timestamp` must be an integer, got: {}", ts)));
        }
    }

    serde_json::from_value(raw).map_err(|e| {
        ExError::new(ExErrorKind::InvalidSnapshot)
            .with_op("parse_snapshot_bytes")
            .with_message(format!("failed to deserialize snapshot: {}", e))
    })
}

/// Serialize a snapshot to pretty-printed JSON.
///
/// # Errors
///
/// - `Serialization`: serde could not encode the snapshot (a metadata value
///   that is not representable as JSON)
pub fn snapshot_to_json(snapshot: &ProjectSnapshot) -> Result<String, ExError> {
    serde_json::to_string_pretty(snapshot).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("snapshot_to_json")
            .with_message(format!("failed to serialize snapshot: {}", e))
    })
}
