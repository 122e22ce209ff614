//! Run report rendering for stdout.

use anyhow::{Context, Result};
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use actsync_sync::{FolderOutcome, FolderStatus, RunReport};

#[derive(Tabled)]
struct OutcomeRow {
    #[tabled(rename = "folder")]
    folder: String,
    #[tabled(rename = "status")]
    status: String,
    #[tabled(rename = "payload")]
    payload: String,
    #[tabled(rename = "remote id")]
    id: String,
    #[tabled(rename = "detail")]
    detail: String,
}

impl From<&FolderOutcome> for OutcomeRow {
    fn from(outcome: &FolderOutcome) -> Self {
        Self {
            folder: outcome.folder.clone(),
            status: colored_label(outcome.status),
            payload: outcome.payload.unwrap_or("-").to_string(),
            id: outcome.id.clone().unwrap_or_else(|| "-".to_string()),
            detail: outcome.detail.clone().unwrap_or_default(),
        }
    }
}

fn colored_label(status: FolderStatus) -> String {
    let label = status.label();
    match status {
        FolderStatus::Created | FolderStatus::Updated | FolderStatus::Valid => {
            label.green().to_string()
        }
        FolderStatus::WouldCreate | FolderStatus::WouldUpdate => label.cyan().to_string(),
        FolderStatus::SkippedNoConfig | FolderStatus::SkippedNoScript => {
            label.yellow().to_string()
        }
        FolderStatus::Invalid | FolderStatus::Failed => label.red().bold().to_string(),
    }
}

/// Print `report` as a table followed by the summary line, or as JSON.
pub fn print_report(report: &RunReport, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(report).context("failed to serialize run report")?
        );
        return Ok(());
    }

    if report.is_empty() {
        println!("No action folders to process.");
        return Ok(());
    }

    let rows: Vec<OutcomeRow> = report.outcomes.iter().map(OutcomeRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
    println!("{}", report.summary());
    Ok(())
}
