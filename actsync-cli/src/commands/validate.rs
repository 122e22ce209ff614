//! `actsync validate`: offline checks, no token or network needed.

use anyhow::{bail, Context, Result};
use clap::Args;

use actsync_detector::{ChangeDetector, GitCli};
use actsync_sync::{pipeline, FolderStatus};

use crate::output;
use crate::CommonArgs;

/// Arguments for `actsync validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Folders to check (default: folders changed by the commit).
    #[arg(conflicts_with = "all")]
    pub folders: Vec<String>,

    /// Check every folder under the actions root.
    #[arg(long)]
    pub all: bool,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

impl ValidateArgs {
    pub fn run(self, common: &CommonArgs) -> Result<()> {
        let settings = common.settings();
        let history = GitCli::new(&settings.repo_dir);
        let detector = ChangeDetector::new(&history, &settings);
        let scope = super::scope_from(self.all, self.folders);

        let folders = pipeline::resolve_scope(&settings, &scope, &detector)
            .context("could not list action folders")?;
        let report = pipeline::validate(&folders);
        output::print_report(&report, self.json)?;

        let invalid = report.count(FolderStatus::Invalid);
        if invalid > 0 {
            bail!("{invalid} folder(s) have an invalid config.yaml");
        }
        Ok(())
    }
}
