//! Change detection for `actsync-detector`.
//!
//! [`ChangeDetector`] reads the list of files touched by one commit from a
//! [`HistorySource`] and answers two questions: which action folders changed,
//! and which files changed inside a given folder. Query failures are logged
//! and surface as empty results; callers never see an error.

mod git;

use std::path::PathBuf;

use actsync_core::Settings;
use thiserror::Error;

pub use git::GitCli;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Errors from a history query.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("failed to run git in {dir}: {source}")]
    Spawn {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("git exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
}

/// Anything that can list the file paths touched by a commit.
pub trait HistorySource {
    /// Repository-relative, `/`-separated paths, in listing order.
    fn changed_paths(&self, commit_ref: &str) -> Result<Vec<String>, DetectError>;
}

/// A fixed listing, for callers that already know the change set.
#[derive(Debug, Clone, Default)]
pub struct StaticHistory(pub Vec<String>);

impl StaticHistory {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(paths.into_iter().map(Into::into).collect())
    }
}

impl HistorySource for StaticHistory {
    fn changed_paths(&self, _commit_ref: &str) -> Result<Vec<String>, DetectError> {
        Ok(self.0.clone())
    }
}

// ---------------------------------------------------------------------------
// ChangeDetector
// ---------------------------------------------------------------------------

/// Answers change questions for one commit.
pub struct ChangeDetector<'a> {
    source: &'a dyn HistorySource,
    commit_ref: String,
    actions_root: String,
}

impl<'a> ChangeDetector<'a> {
    pub fn new(source: &'a dyn HistorySource, settings: &Settings) -> Self {
        Self {
            source,
            commit_ref: settings.commit_ref.clone(),
            actions_root: settings.actions_root.clone(),
        }
    }

    /// Distinct `<root>/<child>` folders touched by the commit, in order of
    /// first appearance.
    pub fn list_changed_action_folders(&self) -> Vec<String> {
        action_folders_in(&self.query(), &self.actions_root)
    }

    /// Files touched inside `folder`, relative to it.
    pub fn list_changed_files_in(&self, folder: &str) -> Vec<String> {
        files_in(&self.query(), folder)
    }

    fn query(&self) -> Vec<String> {
        match self.source.changed_paths(&self.commit_ref) {
            Ok(paths) => paths,
            Err(err) => {
                tracing::error!(commit = %self.commit_ref, "history query failed: {err}");
                Vec::new()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Path filtering
// ---------------------------------------------------------------------------

/// Distinct `<root>/<child>` prefixes of `paths`. A file sitting directly in
/// `root` names no folder and is ignored.
pub fn action_folders_in(paths: &[String], root: &str) -> Vec<String> {
    let root = root.trim_end_matches('/');
    let mut folders: Vec<String> = Vec::new();
    for path in paths {
        let Some(rest) = path.strip_prefix(root).and_then(|r| r.strip_prefix('/')) else {
            continue;
        };
        let Some((child, tail)) = rest.split_once('/') else {
            continue;
        };
        if child.is_empty() || tail.is_empty() {
            continue;
        }
        let folder = format!("{root}/{child}");
        if !folders.contains(&folder) {
            folders.push(folder);
        }
    }
    folders
}

/// Paths under `folder`, with the folder prefix stripped. Duplicates (as
/// produced by per-parent merge listings) are dropped.
pub fn files_in(paths: &[String], folder: &str) -> Vec<String> {
    let prefix = format!("{}/", folder.trim_end_matches('/'));
    let mut files: Vec<String> = Vec::new();
    for path in paths {
        if let Some(rel) = path.strip_prefix(&prefix) {
            if !rel.is_empty() && !files.iter().any(|f| f == rel) {
                files.push(rel.to_string());
            }
        }
    }
    files
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
