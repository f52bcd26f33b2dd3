//! Validate command
//!
//! Usage: cardplay validate <SNAPSHOT>
//!
//! Prints one line per issue and exits with status 2 when any exist.

use std::path::PathBuf;

use cardplay_core::errors::ExError;
use cardplay_core::rules::validate_snapshot;
use cardplay_core_types::RequestContext;
use clap::Args;

use super::{load_snapshot, CommandResult, Outcome};

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Snapshot to check
    pub snapshot: PathBuf,
}

/// Execute validate command
pub fn execute(args: ValidateArgs, ctx: &RequestContext) -> CommandResult {
    let snapshot = load_snapshot(&args.snapshot, ctx)?;
    let issues = validate_snapshot(&snapshot);

    if issues.is_empty() {
        println!("✓ {} is valid", args.snapshot.display());
        return Ok(Outcome::Clean);
    }

    for issue in issues {
        let text = issue.to_string();
        let ex_err = ExError::from(issue);
        println!("{}: {}", ex_err.code(), text);
    }
    Ok(Outcome::Findings)
}
