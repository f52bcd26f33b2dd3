//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

#[doc(hidden)]
pub use cardplay_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
#[doc(hidden)]
pub use tracing;

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use cardplay_core::log_op_start;
/// log_op_start!("diff_projects");
/// log_op_start!("diff_projects", stream_count = 4);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        $crate::logging_facility::macros::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::macros::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        $crate::logging_facility::macros::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::macros::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use cardplay_core::log_op_end;
/// log_op_end!("diff_projects", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        $crate::logging_facility::macros::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::macros::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        $crate::logging_facility::macros::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::macros::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// The error is converted into [`ExError`](crate::errors::ExError) so the
/// stable error code is always present on the event.
///
/// # Example
///
/// ```
/// # use cardplay_core::{log_op_error, errors::CardplayError};
/// let err = CardplayError::InvalidSnapshot { reason: "empty".to_string() };
/// log_op_error!("parse_snapshot_bytes", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::logging_facility::macros::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::macros::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::logging_facility::macros::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::macros::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($field)*
        );
    }};
}
