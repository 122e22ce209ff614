//! Shared sync entrypoint used by the `sync` and `validate` commands.

use actsync_core::{folder, payload::load_config, ActionFolder, PayloadError, Settings};
use actsync_detector::ChangeDetector;
use actsync_remote::ActionApi;

use crate::report::{FolderOutcome, FolderStatus, RunReport};
use crate::{Orchestrator, SyncError};

/// Which folders a run covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncScope {
    /// Folders touched by the configured commit.
    Changed,
    /// Every folder under the actions root.
    All,
    /// Named folders (`scraper` or `actions/scraper`).
    Folders(Vec<String>),
}

/// Resolve a scope to concrete folders.
pub fn resolve_scope(
    settings: &Settings,
    scope: &SyncScope,
    detector: &ChangeDetector<'_>,
) -> Result<Vec<ActionFolder>, SyncError> {
    match scope {
        SyncScope::Changed => Ok(detector
            .list_changed_action_folders()
            .iter()
            .map(|rel| settings.folder(rel))
            .collect()),
        SyncScope::All => folder::discover(&settings.repo_dir, &settings.actions_root)
            .map_err(SyncError::Discover),
        SyncScope::Folders(names) => {
            let mut folders: Vec<ActionFolder> = Vec::new();
            for name in names {
                let f = settings.resolve_folder(name);
                if !folders.contains(&f) {
                    folders.push(f);
                }
            }
            Ok(folders)
        }
    }
}

/// Run the sync for a scope.
pub fn run(
    settings: &Settings,
    scope: &SyncScope,
    api: &dyn ActionApi,
    detector: &ChangeDetector<'_>,
) -> Result<RunReport, SyncError> {
    let folders = resolve_scope(settings, scope, detector)?;
    if folders.is_empty() {
        tracing::info!("no action folders to sync");
    }
    Orchestrator::new(settings, api, detector).sync_folders(&folders)
}

/// Offline check of each folder: skips, YAML and required-key problems, and
/// advisory lint findings. No network.
pub fn validate(folders: &[ActionFolder]) -> RunReport {
    let mut report = RunReport::new(false);
    for folder in folders {
        report.push(validate_folder(folder));
    }
    report
}

fn validate_folder(folder: &ActionFolder) -> FolderOutcome {
    use actsync_core::validate::lint;

    let rel = folder.rel_path();
    if !folder.has_config() {
        tracing::warn!(folder = rel, "skipping: no config.yaml");
        return FolderOutcome::new(rel, FolderStatus::SkippedNoConfig);
    }
    if !folder.has_script() {
        // config is still worth checking before reporting the skip
        if let Ok(config) = load_config(folder) {
            for finding in lint(&config) {
                tracing::warn!(folder = rel, "config.yaml: {finding}");
            }
        }
        tracing::warn!(folder = rel, "skipping: no main.py");
        return FolderOutcome::new(rel, FolderStatus::SkippedNoScript);
    }
    match actsync_core::build_full_payload(folder) {
        Ok(full) => {
            let findings = lint(&full.config);
            for finding in &findings {
                tracing::warn!(folder = rel, "config.yaml: {finding}");
            }
            tracing::info!(folder = rel, "config.yaml is valid");
            let outcome = FolderOutcome::new(rel, FolderStatus::Valid);
            if findings.is_empty() {
                outcome
            } else {
                outcome.with_detail(format!("{} warning(s)", findings.len()))
            }
        }
        Err(err @ (PayloadError::InvalidConfig(_) | PayloadError::InvalidYaml { .. })) => {
            tracing::error!(folder = rel, "{err}");
            FolderOutcome::new(rel, FolderStatus::Invalid).with_detail(err.to_string())
        }
        Err(err) => {
            tracing::error!(folder = rel, "{err}");
            FolderOutcome::new(rel, FolderStatus::Failed).with_detail(err.to_string())
        }
    }
}
