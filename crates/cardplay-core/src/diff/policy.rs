//! Stream equality policy trait and implementations
//!
//! Stream comparison is the one place where the diff engine trades precision
//! for speed. The policy decides when two versions of a stream count as
//! equal and, inside a modified stream, which shared events count as
//! modified. It is injected into [`diff_projects_with`](crate::diff::diff_projects_with)
//! and [`detect_merge_conflicts_with`](crate::merge::detect_merge_conflicts_with).

use crate::model::{Event, EventStreamRecord};

/// Policy trait for comparing streams and their events
pub trait StreamEquality {
    /// Whether two versions of the same stream id are unchanged
    fn streams_equal(&self, old: &EventStreamRecord, new: &EventStreamRecord) -> bool;

    /// Whether an event id present in both versions of a modified stream
    /// counts towards `EventChanges::modified`
    fn event_modified(&self, old: &Event, new: &Event) -> bool;
}

/// Default coarse policy
///
/// Streams are equal when `id`, `name` and the number of events match; event
/// content is never inspected. Every event id present in both versions counts
/// as modified. Replacing one event with another keeps the count and is
/// therefore not detected.
///
/// # Example
/// ```
/// use cardplay_core::diff::policy::{ShallowStreamEquality, StreamEquality};
/// use cardplay_core::model::{Event, EventStreamRecord};
///
/// let a = EventStreamRecord::new("s1", "Lead").with_events(vec![Event::new("e1")]);
/// let b = EventStreamRecord::new("s1", "Lead").with_events(vec![Event::new("e2")]);
/// assert!(ShallowStreamEquality.streams_equal(&a, &b));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ShallowStreamEquality;

impl StreamEquality for ShallowStreamEquality {
    fn streams_equal(&self, old: &EventStreamRecord, new: &EventStreamRecord) -> bool {
        old.id == new.id && old.name == new.name && old.events.len() == new.events.len()
    }

    fn event_modified(&self, _old: &Event, _new: &Event) -> bool {
        true
    }
}

/// Content-sensitive policy
///
/// Streams are equal only when the shallow rule holds and every event is
/// identical (same id, same payload, same position). Shared event ids count
/// as modified only when their payload differs.
///
/// # Example
/// ```
/// use cardplay_core::diff::policy::{DeepEventEquality, StreamEquality};
/// use cardplay_core::model::{Event, EventStreamRecord};
///
/// let a = EventStreamRecord::new("s1", "Lead").with_events(vec![Event::new("e1")]);
/// let b = EventStreamRecord::new("s1", "Lead").with_events(vec![Event::new("e2")]);
/// assert!(!DeepEventEquality.streams_equal(&a, &b));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DeepEventEquality;

impl StreamEquality for DeepEventEquality {
    fn streams_equal(&self, old: &EventStreamRecord, new: &EventStreamRecord) -> bool {
        ShallowStreamEquality.streams_equal(old, new) && old.events == new.events
    }

    fn event_modified(&self, old: &Event, new: &Event) -> bool {
        old != new
    }
}
