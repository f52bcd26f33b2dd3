//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent between the logging
//! macros, the error facility and log-capturing tests.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Entity identifiers
pub const FIELD_STREAM_ID: &str = "stream_id";

// Collection sizes
pub const FIELD_STREAM_CHANGES: &str = "stream_changes";
pub const FIELD_CLIP_CHANGES: &str = "clip_changes";
pub const FIELD_ROUTING_CHANGES: &str = "routing_changes";
pub const FIELD_CONFLICT_COUNT: &str = "conflict_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
