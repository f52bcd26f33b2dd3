//! Conflicts command
//!
//! Usage: cardplay conflicts <BASE> <LOCAL> <REMOTE> [--format json|summary|markdown]
//!
//! Exits with status 2 when any conflict is found.

use std::path::PathBuf;

use cardplay_core::merge::analyze_merge_with;
use cardplay_core::render_human_summary;
use cardplay_core_types::RequestContext;
use clap::Args;

use super::{load_snapshot, stream_policy, CommandResult, OutputFormat, Outcome};

#[derive(Debug, Args)]
pub struct ConflictsArgs {
    /// Common ancestor snapshot
    pub base: PathBuf,

    /// Snapshot of the local branch
    pub local: PathBuf,

    /// Snapshot of the remote branch
    pub remote: PathBuf,

    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Compare event payloads instead of event counts
    #[arg(long)]
    pub deep_events: bool,
}

/// Execute conflicts command
pub fn execute(args: ConflictsArgs, ctx: &RequestContext) -> CommandResult {
    let base = load_snapshot(&args.base, ctx)?;
    let local = load_snapshot(&args.local, ctx)?;
    let remote = load_snapshot(&args.remote, ctx)?;

    let analysis = analyze_merge_with(&base, &local, &remote, stream_policy(args.deep_events));

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis.conflicts)?),
        OutputFormat::Summary => {
            println!("{} conflict(s)", analysis.conflicts.len());
            for conflict in &analysis.conflicts {
                println!("  {} [{}]", conflict.id, conflict.conflict_type);
            }
        }
        OutputFormat::Markdown => print!("{}", render_human_summary(&analysis.local_with_conflicts())),
    }

    if analysis.has_conflicts() {
        Ok(Outcome::Findings)
    } else {
        Ok(Outcome::Clean)
    }
}
