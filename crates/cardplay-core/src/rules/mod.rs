//! Opt-in structural checks for project snapshots.

pub mod invariants;
pub mod validation;

pub use validation::{ensure_valid, validate_snapshot};
