//! Digest command
//!
//! Usage: cardplay digest <SNAPSHOT>

use std::path::PathBuf;

use cardplay_core::snapshot::semantic_digest;
use cardplay_core_types::RequestContext;
use clap::Args;

use super::{load_snapshot, CommandResult, Outcome};

#[derive(Debug, Args)]
pub struct DigestArgs {
    /// Snapshot to hash
    pub snapshot: PathBuf,
}

/// Execute digest command
pub fn execute(args: DigestArgs, ctx: &RequestContext) -> CommandResult {
    let snapshot = load_snapshot(&args.snapshot, ctx)?;
    println!("{}", semantic_digest(&snapshot)?);
    Ok(Outcome::Clean)
}
