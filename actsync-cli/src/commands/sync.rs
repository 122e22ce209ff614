//! `actsync sync`: create or update remote actions.

use anyhow::{bail, Context, Result};
use clap::Args;

use actsync_core::settings::DEFAULT_API_BASE_URL;
use actsync_detector::{ChangeDetector, GitCli};
use actsync_remote::HttpActionClient;
use actsync_sync::pipeline;

use crate::output;
use crate::CommonArgs;

/// Arguments for `actsync sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Folders to sync, as `name` or `actions/name` (default: folders changed by the commit).
    #[arg(conflicts_with = "all")]
    pub folders: Vec<String>,

    /// Sync every folder under the actions root.
    #[arg(long)]
    pub all: bool,

    /// API token; a leading `Bearer ` and any whitespace are stripped.
    #[arg(long, env = "ACTSYNC_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Base URL of the action API.
    #[arg(long, env = "ACTSYNC_API_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_url: String,

    /// Look up remote actions but send no create or update requests.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run report as JSON.
    #[arg(long)]
    pub json: bool,
}

impl SyncArgs {
    pub fn run(self, common: &CommonArgs) -> Result<()> {
        let settings = common
            .settings()
            .with_api_base_url(self.api_url.as_str())
            .with_token(self.token.as_deref())
            .with_dry_run(self.dry_run);
        if !settings.has_token() {
            bail!("API token is missing; set ACTSYNC_TOKEN or pass --token");
        }

        let history = GitCli::new(&settings.repo_dir);
        let detector = ChangeDetector::new(&history, &settings);
        let api = HttpActionClient::new(&settings);
        let scope = super::scope_from(self.all, self.folders);

        match pipeline::run(&settings, &scope, &api, &detector) {
            Ok(report) => {
                output::print_report(&report, self.json)?;
                tracing::info!("{}", report.summary());
                Ok(())
            }
            Err(err) => {
                if let Some(partial) = err.partial_report() {
                    output::print_report(partial, self.json)?;
                }
                Err(err).context("sync aborted")
            }
        }
    }
}
