//! Action folders on disk.
//!
//! An action folder is an immediate child of the actions root, e.g.
//! `actions/scraper`, holding a `config.yaml` and a `main.py`. Folders are
//! rediscovered every run and never persisted.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{io_err, PayloadError};

/// Configuration document expected in every action folder.
pub const CONFIG_FILE: &str = "config.yaml";
/// Script payload expected in every action folder.
pub const SCRIPT_FILE: &str = "main.py";

/// One deployable action, identified by its path relative to the repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionFolder {
    rel: String,
    dir: PathBuf,
}

impl ActionFolder {
    /// `rel` is the repository-relative, `/`-separated path (`actions/<name>`).
    pub fn new(repo_dir: &Path, rel: impl Into<String>) -> Self {
        let rel = rel.into().trim_end_matches('/').to_string();
        let dir = repo_dir.join(&rel);
        Self { rel, dir }
    }

    /// Repository-relative path, without a trailing separator.
    pub fn rel_path(&self) -> &str {
        &self.rel
    }

    /// Absolute (or repo-joined) directory on disk.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Base name; becomes the remote resource name.
    pub fn name(&self) -> &str {
        self.rel.rsplit('/').next().unwrap_or(&self.rel)
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    pub fn script_path(&self) -> PathBuf {
        self.dir.join(SCRIPT_FILE)
    }

    pub fn has_config(&self) -> bool {
        self.config_path().is_file()
    }

    pub fn has_script(&self) -> bool {
        self.script_path().is_file()
    }
}

impl fmt::Display for ActionFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rel)
    }
}

/// List every immediate subdirectory of `<repo_dir>/<actions_root>`, sorted by name.
///
/// A missing actions root yields an empty list.
pub fn discover(repo_dir: &Path, actions_root: &str) -> Result<Vec<ActionFolder>, PayloadError> {
    let root = repo_dir.join(actions_root);
    if !root.exists() {
        return Ok(vec![]);
    }
    let mut names: Vec<String> = std::fs::read_dir(&root)
        .map_err(|e| io_err(&root, e))?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    let root = actions_root.trim_end_matches('/');
    Ok(names
        .into_iter()
        .map(|name| ActionFolder::new(repo_dir, format!("{root}/{name}")))
        .collect())
}

/// Resolve a user-supplied folder argument: either a bare action name
/// (`scraper`) or a path already rooted at the actions root (`actions/scraper`).
pub fn resolve(repo_dir: &Path, actions_root: &str, arg: &str) -> ActionFolder {
    let root = actions_root.trim_end_matches('/');
    let arg = arg.trim_end_matches('/');
    if arg.starts_with(&format!("{root}/")) {
        ActionFolder::new(repo_dir, arg)
    } else {
        ActionFolder::new(repo_dir, format!("{root}/{arg}"))
    }
}
