//! actsync: sync changed action folders to the remote action registry.
//!
//! # Usage
//!
//! ```text
//! actsync sync [FOLDER...] [--all] [--dry-run] [--json]
//! actsync validate [FOLDER...] [--all]
//! actsync changed [--json]
//! ```
//!
//! Exit code is 0 on completion (including per-folder failures) and 1 when
//! the token is missing, a config.yaml lacks required keys, or the run fails.

mod commands;
mod logging;
mod output;

use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use actsync_core::settings::{self, Settings, DEFAULT_ACTIONS_ROOT, DEFAULT_COMMIT_REF};
use commands::{changed::ChangedArgs, sync::SyncArgs, validate::ValidateArgs};
use logging::LogFormat;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "actsync",
    version,
    about = "Create and update remote actions from changed action folders",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create or update remote actions for changed folders.
    Sync(SyncArgs),

    /// Check config.yaml and main.py of folders without contacting the API.
    Validate(ValidateArgs),

    /// List action folders changed by the commit.
    Changed(ChangedArgs),
}

/// Options shared by every subcommand.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Repository working tree.
    #[arg(long, global = true, default_value = ".")]
    pub repo: PathBuf,

    /// Directory holding one sub-directory per action, relative to the repository.
    #[arg(long, global = true, default_value = DEFAULT_ACTIONS_ROOT)]
    pub actions_root: String,

    /// Commit whose changes are inspected.
    #[arg(long, global = true, env = "ACTSYNC_COMMIT_REF", default_value = DEFAULT_COMMIT_REF)]
    pub commit: String,

    /// File whose contents name the tool version sent in User-Agent.
    #[arg(long, global = true, env = "ACTSYNC_VERSION_FILE")]
    pub version_file: Option<PathBuf>,

    /// Log line format written to stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl CommonArgs {
    /// Settings without API credentials.
    pub fn settings(&self) -> Settings {
        let version = match &self.version_file {
            Some(path) => settings::read_version_marker(path),
            None => env!("CARGO_PKG_VERSION").to_string(),
        };
        Settings::default()
            .with_repo_dir(&self.repo)
            .with_actions_root(self.actions_root.as_str())
            .with_commit_ref(self.commit.as_str())
            .with_version(&version)
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Sync(args) => args.run(&cli.common),
        Commands::Validate(args) => args.run(&cli.common),
        Commands::Changed(args) => args.run(&cli.common),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.common.log_format);

    match panic::catch_unwind(AssertUnwindSafe(|| run(cli))) {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(err)) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
        Err(_) => {
            tracing::error!("actsync terminated unexpectedly");
            ExitCode::FAILURE
        }
    }
}
