//! Cardplay CLI
//!
//! Command-line interface for comparing project snapshots

use std::time::Instant;

use cardplay_core::logging_facility::{self, Profile};
use cardplay_core::{log_op_end, log_op_error, log_op_start};
use cardplay_core_types::RequestContext;
use clap::{Parser, Subcommand};

mod commands;

use commands::Outcome;

#[derive(Debug, Parser)]
#[command(name = "cardplay")]
#[command(about = "Cardplay - project snapshot diff and merge checks", long_about = None)]
struct Cli {
    /// Logging profile (development, production)
    #[arg(long, global = true, default_value = "development")]
    log_profile: Profile,

    /// Contributor name recorded on the run's log span
    #[arg(long, global = true)]
    contributor: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Diff two snapshots
    Diff(commands::diff::DiffArgs),
    /// Detect merge conflicts between two branches of a base snapshot
    Conflicts(commands::conflicts::ConflictsArgs),
    /// Check a snapshot for duplicate ids and dangling references
    Validate(commands::validate::ValidateArgs),
    /// Print the semantic digest of a snapshot
    Digest(commands::digest::DigestArgs),
}

impl Commands {
    /// Operation name used on the command's start/end log events
    fn op_name(&self) -> &'static str {
        match self {
            Commands::Diff(_) => "cli.diff",
            Commands::Conflicts(_) => "cli.conflicts",
            Commands::Validate(_) => "cli.validate",
            Commands::Digest(_) => "cli.digest",
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile);

    let mut ctx = RequestContext::new();
    if let Some(contributor) = cli.contributor {
        ctx = ctx.with_contributor(contributor);
    }
    let span = tracing::info_span!(
        "cardplay",
        request_id = %ctx.request_id,
        contributor = ctx.contributor.as_deref()
    );
    let _guard = span.enter();

    let op = cli.command.op_name();
    let started = Instant::now();
    log_op_start!(op);

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args, &ctx),
        Commands::Conflicts(args) => commands::conflicts::execute(args, &ctx),
        Commands::Validate(args) => commands::validate::execute(args, &ctx),
        Commands::Digest(args) => commands::digest::execute(args, &ctx),
    };

    let duration_ms = logging_facility::elapsed_ms(started);
    match result {
        Ok(outcome) => {
            let findings = outcome == Outcome::Findings;
            log_op_end!(op, duration_ms = duration_ms, findings = findings);
            if findings {
                std::process::exit(2);
            }
        }
        Err(e) => {
            log_op_error!(op, e.clone(), duration_ms = duration_ms);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
