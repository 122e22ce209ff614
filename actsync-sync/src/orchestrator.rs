//! Per-folder sync state machine.
//!
//! ```text
//! no config.yaml ──────────────────────────────▶ SkippedNoConfig
//! no main.py ──────────────────────────────────▶ SkippedNoScript
//! build full payload ── InvalidConfig ─────────▶ abort run
//!                   └── other error ───────────▶ Failed
//! lookup by name ── not found ── create ───────▶ Created | Failed
//!               └── found ── choose payload ── update ──▶ Updated | Failed
//! ```
//!
//! The file-only payload is chosen when the commit changed `main.py` and
//! nothing else in the folder. Folders are processed strictly one after another.

use actsync_core::{
    build_file_only_payload, build_full_payload, validate::lint, ActionFolder, FullPayload,
    PayloadError, Settings, SyncPayload, ValidationError, SCRIPT_FILE,
};
use actsync_detector::ChangeDetector;
use actsync_remote::{extract_id, ActionApi};

use crate::error::SyncError;
use crate::report::{FolderOutcome, FolderStatus, RunReport};

/// Drives [`ActionApi`] calls for a list of folders.
pub struct Orchestrator<'a> {
    settings: &'a Settings,
    api: &'a dyn ActionApi,
    detector: &'a ChangeDetector<'a>,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        settings: &'a Settings,
        api: &'a dyn ActionApi,
        detector: &'a ChangeDetector<'a>,
    ) -> Self {
        Self {
            settings,
            api,
            detector,
        }
    }

    /// Sync every folder in order. Stops only when a folder's config is
    /// missing required keys.
    pub fn sync_folders(&self, folders: &[ActionFolder]) -> Result<RunReport, SyncError> {
        let mut report = RunReport::new(self.settings.dry_run);
        for folder in folders {
            match self.sync_folder(folder) {
                Ok(outcome) => report.push(outcome),
                Err(source) => {
                    report.push(
                        FolderOutcome::new(folder.rel_path(), FolderStatus::Invalid)
                            .with_detail(source.to_string()),
                    );
                    return Err(SyncError::ValidationFailed { source, report });
                }
            }
        }
        Ok(report)
    }

    /// Run one folder to its terminal state.
    pub fn sync_folder(&self, folder: &ActionFolder) -> Result<FolderOutcome, ValidationError> {
        let rel = folder.rel_path();

        if !folder.has_config() {
            tracing::warn!(folder = rel, "skipping: no config.yaml");
            return Ok(FolderOutcome::new(rel, FolderStatus::SkippedNoConfig));
        }
        if !folder.has_script() {
            tracing::warn!(folder = rel, "skipping: no main.py");
            return Ok(FolderOutcome::new(rel, FolderStatus::SkippedNoScript));
        }

        let full = match build_full_payload(folder) {
            Ok(full) => full,
            Err(PayloadError::InvalidConfig(err)) => {
                tracing::error!(folder = rel, "{err}");
                return Err(err);
            }
            Err(err) => {
                tracing::error!(folder = rel, "cannot build payload: {err}");
                return Ok(FolderOutcome::new(rel, FolderStatus::Failed).with_detail(err.to_string()));
            }
        };
        for finding in lint(&full.config) {
            tracing::warn!(folder = rel, "config.yaml: {finding}");
        }

        Ok(match self.api.find_by_name(folder.name()) {
            None => self.create(folder, full),
            Some(id) => self.update(folder, id, full),
        })
    }

    fn create(&self, folder: &ActionFolder, full: FullPayload) -> FolderOutcome {
        let rel = folder.rel_path();
        let payload = SyncPayload::from(full);

        if self.settings.dry_run {
            tracing::info!(folder = rel, "[dry-run] would create {}", folder.name());
            return FolderOutcome::new(rel, FolderStatus::WouldCreate).with_payload(payload.kind());
        }

        match self.api.create(&payload) {
            Ok(response) => {
                let id = response.body.as_json().and_then(extract_id);
                tracing::info!(folder = rel, id = id.as_deref(), "created {}", folder.name());
                FolderOutcome::new(rel, FolderStatus::Created)
                    .with_payload(payload.kind())
                    .with_id(id)
            }
            Err(err) => {
                tracing::error!(folder = rel, "create failed: {err}");
                FolderOutcome::new(rel, FolderStatus::Failed)
                    .with_payload(payload.kind())
                    .with_detail(err.to_string())
            }
        }
    }

    fn update(&self, folder: &ActionFolder, id: String, full: FullPayload) -> FolderOutcome {
        let rel = folder.rel_path();
        let payload = self.choose_update_payload(folder, full);

        if self.settings.dry_run {
            tracing::info!(
                folder = rel,
                id = %id,
                "[dry-run] would update {} with {} payload",
                folder.name(),
                payload.kind()
            );
            return FolderOutcome::new(rel, FolderStatus::WouldUpdate)
                .with_payload(payload.kind())
                .with_id(Some(id));
        }

        match self.api.update(&id, &payload) {
            Ok(_) => {
                tracing::info!(
                    folder = rel,
                    id = %id,
                    "updated {} with {} payload",
                    folder.name(),
                    payload.kind()
                );
                FolderOutcome::new(rel, FolderStatus::Updated)
                    .with_payload(payload.kind())
                    .with_id(Some(id))
            }
            Err(err) => {
                tracing::error!(folder = rel, id = %id, "update failed: {err}");
                FolderOutcome::new(rel, FolderStatus::Failed)
                    .with_payload(payload.kind())
                    .with_id(Some(id))
                    .with_detail(err.to_string())
            }
        }
    }

    fn choose_update_payload(&self, folder: &ActionFolder, full: FullPayload) -> SyncPayload {
        let changed = self.detector.list_changed_files_in(folder.rel_path());
        if !script_only_change(&changed) {
            return full.into();
        }
        match build_file_only_payload(folder) {
            Ok(partial) => partial.into(),
            Err(err) => {
                tracing::warn!(
                    folder = folder.rel_path(),
                    "file-only payload unavailable, sending full payload: {err}"
                );
                full.into()
            }
        }
    }
}

/// True when the change set is non-empty and consists only of the script.
pub fn script_only_change(changed: &[String]) -> bool {
    !changed.is_empty() && changed.iter().all(|f| f == SCRIPT_FILE)
}
