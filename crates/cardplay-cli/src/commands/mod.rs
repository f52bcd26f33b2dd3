//! Subcommand implementations
//!
//! Each command reads snapshot documents from disk, runs one core operation
//! and prints the result to stdout.

pub mod conflicts;
pub mod diff;
pub mod digest;
pub mod validate;

use std::path::Path;

use cardplay_core::diff::{DeepEventEquality, ShallowStreamEquality, StreamEquality};
use cardplay_core::errors::{CardplayError, ExError};
use cardplay_core::snapshot::parse_snapshot_bytes;
use cardplay_core::ProjectSnapshot;
use cardplay_core_types::RequestContext;
use clap::ValueEnum;

pub type CommandResult = Result<Outcome, ExError>;

/// How a successful command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to report
    Clean,
    /// Conflicts or validation issues were found (exit status 2)
    Findings,
}

/// Output format shared by the reporting commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full structured result as pretty JSON
    Json,
    /// Aggregate counts only
    Summary,
    /// Markdown review report
    Markdown,
}

/// Read and decode a snapshot document
pub fn load_snapshot(path: &Path, ctx: &RequestContext) -> Result<ProjectSnapshot, ExError> {
    let bytes = std::fs::read(path).map_err(|e| {
        ExError::from(CardplayError::from(e))
            .with_op("load_snapshot")
            .with_entity_id(path.display().to_string())
            .with_request_id(ctx.request_id)
    })?;
    parse_snapshot_bytes(&bytes).map_err(|e| {
        let message = format!("{}: {}", path.display(), e.message());
        e.with_message(message).with_request_id(ctx.request_id)
    })
}

/// Stream comparison policy selected by `--deep-events`
pub fn stream_policy(deep_events: bool) -> &'static dyn StreamEquality {
    if deep_events {
        &DeepEventEquality
    } else {
        &ShallowStreamEquality
    }
}
