//! Per-folder outcomes and run summary.

use serde::Serialize;

/// Terminal state of one folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FolderStatus {
    /// No `config.yaml`; skipped.
    SkippedNoConfig,
    /// No `main.py`; skipped.
    SkippedNoScript,
    Created,
    Updated,
    /// `--dry-run`: a create would have been sent.
    WouldCreate,
    /// `--dry-run`: an update would have been sent.
    WouldUpdate,
    /// Passed offline validation.
    Valid,
    /// Required keys missing or YAML unusable.
    Invalid,
    /// Build, request, or I/O failure; the run continued.
    Failed,
}

impl FolderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FolderStatus::SkippedNoConfig => "SKIPPED (no config.yaml)",
            FolderStatus::SkippedNoScript => "SKIPPED (no main.py)",
            FolderStatus::Created => "CREATED",
            FolderStatus::Updated => "UPDATED",
            FolderStatus::WouldCreate => "WOULD CREATE",
            FolderStatus::WouldUpdate => "WOULD UPDATE",
            FolderStatus::Valid => "VALID",
            FolderStatus::Invalid => "INVALID",
            FolderStatus::Failed => "FAILED",
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, FolderStatus::SkippedNoConfig | FolderStatus::SkippedNoScript)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, FolderStatus::Invalid | FolderStatus::Failed)
    }
}

/// What happened to one folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderOutcome {
    pub folder: String,
    pub status: FolderStatus,
    /// `"full"` or `"file-only"` when a payload was chosen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<&'static str>,
    /// Remote id of the updated action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl FolderOutcome {
    pub fn new(folder: impl Into<String>, status: FolderStatus) -> Self {
        Self {
            folder: folder.into(),
            status,
            payload: None,
            id: None,
            detail: None,
        }
    }

    pub fn with_payload(mut self, kind: &'static str) -> Self {
        self.payload = Some(kind);
        self
    }

    pub fn with_id(mut self, id: Option<String>) -> Self {
        self.id = id;
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Outcomes of a run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub dry_run: bool,
    pub outcomes: Vec<FolderOutcome>,
}

impl RunReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: FolderOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn count(&self, status: FolderStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status.is_failure()).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status.is_skip()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Outcome for `folder`, if it was processed.
    pub fn get(&self, folder: &str) -> Option<&FolderOutcome> {
        self.outcomes.iter().find(|o| o.folder == folder)
    }

    /// One-line summary for the closing log line.
    pub fn summary(&self) -> String {
        let prefix = if self.dry_run { "[dry-run] " } else { "" };
        format!(
            "{prefix}{} folder(s): {} created, {} updated, {} skipped, {} failed",
            self.outcomes.len(),
            self.count(FolderStatus::Created) + self.count(FolderStatus::WouldCreate),
            self.count(FolderStatus::Updated) + self.count(FolderStatus::WouldUpdate),
            self.skipped(),
            self.failures(),
        )
    }
}
