//! `actsync changed`: list action folders touched by the commit.

use anyhow::{Context, Result};
use clap::Args;

use actsync_detector::{ChangeDetector, GitCli};

use crate::CommonArgs;

#[derive(Args, Debug)]
pub struct ChangedArgs {
    /// Print a JSON array instead of one folder per line.
    #[arg(long)]
    pub json: bool,
}

impl ChangedArgs {
    pub fn run(self, common: &CommonArgs) -> Result<()> {
        let settings = common.settings();
        let history = GitCli::new(&settings.repo_dir);
        let folders = ChangeDetector::new(&history, &settings).list_changed_action_folders();

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&folders).context("failed to serialize folder list")?
            );
        } else {
            for folder in &folders {
                println!("{folder}");
            }
        }
        Ok(())
    }
}
