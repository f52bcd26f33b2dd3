//! Diff command
//!
//! Usage: cardplay diff <OLD> <NEW> [--format json|summary|markdown] [--deep-events]

use std::path::PathBuf;

use cardplay_core::{diff_projects_with, generate_diff_summary, render_human_summary};
use cardplay_core_types::RequestContext;
use clap::Args;

use super::{load_snapshot, stream_policy, CommandResult, OutputFormat, Outcome};

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Snapshot to diff from
    pub old: PathBuf,

    /// Snapshot to diff to
    pub new: PathBuf,

    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Compare event payloads instead of event counts
    #[arg(long)]
    pub deep_events: bool,
}

/// Execute diff command
pub fn execute(args: DiffArgs, ctx: &RequestContext) -> CommandResult {
    let old = load_snapshot(&args.old, ctx)?;
    let new = load_snapshot(&args.new, ctx)?;

    let diff = diff_projects_with(&old, &new, stream_policy(args.deep_events));

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&diff)?),
        OutputFormat::Summary => {
            println!("{}", serde_json::to_string_pretty(&generate_diff_summary(&diff))?)
        }
        OutputFormat::Markdown => print!("{}", render_human_summary(&diff)),
    }

    Ok(Outcome::Clean)
}
