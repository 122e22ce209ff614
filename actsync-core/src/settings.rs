//! Run settings, constructed once at process entry and passed by reference.
//!
//! Library crates never read the environment; the binary maps CLI flags and
//! environment variables into a [`Settings`] value.

use std::path::{Path, PathBuf};

use crate::folder::{self, ActionFolder};
use crate::token::sanitize_token;

pub const DEFAULT_API_BASE_URL: &str = "https://api.actsync.dev";
pub const DEFAULT_COMMIT_REF: &str = "HEAD";
pub const DEFAULT_ACTIONS_ROOT: &str = "actions";
pub const UNKNOWN_VERSION: &str = "unknown";
pub const USER_AGENT_PRODUCT: &str = "actsync";

/// Everything a run needs to know about its environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// API origin without a trailing `/`.
    pub api_base_url: String,
    /// Sanitized credential; may be empty for offline commands.
    pub token: String,
    /// Commit whose changes are inspected.
    pub commit_ref: String,
    /// Repository working tree.
    pub repo_dir: PathBuf,
    /// Actions root, relative to `repo_dir`.
    pub actions_root: String,
    pub user_agent: String,
    /// Skip create / update requests.
    pub dry_run: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token: String::new(),
            commit_ref: DEFAULT_COMMIT_REF.to_string(),
            repo_dir: PathBuf::from("."),
            actions_root: DEFAULT_ACTIONS_ROOT.to_string(),
            user_agent: user_agent(env!("CARGO_PKG_VERSION")),
            dry_run: false,
        }
    }
}

impl Settings {
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Stores the sanitized form of `raw`.
    pub fn with_token(mut self, raw: Option<&str>) -> Self {
        self.token = sanitize_token(raw);
        self
    }

    pub fn with_commit_ref(mut self, commit_ref: impl Into<String>) -> Self {
        self.commit_ref = commit_ref.into();
        self
    }

    pub fn with_repo_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.repo_dir = dir.into();
        self
    }

    pub fn with_actions_root(mut self, root: impl Into<String>) -> Self {
        self.actions_root = root.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.user_agent = user_agent(version);
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    /// Folder handle for a repository-relative path such as `actions/scraper`.
    pub fn folder(&self, rel: &str) -> ActionFolder {
        ActionFolder::new(&self.repo_dir, rel)
    }

    /// Resolve a folder argument given on the command line.
    pub fn resolve_folder(&self, arg: &str) -> ActionFolder {
        folder::resolve(&self.repo_dir, &self.actions_root, arg)
    }
}

/// `User-Agent` value for a tool version.
pub fn user_agent(version: &str) -> String {
    format!("{USER_AGENT_PRODUCT}/{version}")
}

/// Read a version marker file. Unreadable or blank markers yield `"unknown"`.
pub fn read_version_marker(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(contents) if !contents.trim().is_empty() => contents.trim().to_string(),
        Ok(_) => UNKNOWN_VERSION.to_string(),
        Err(err) => {
            tracing::warn!("cannot read version marker {}: {err}", path.display());
            UNKNOWN_VERSION.to_string()
        }
    }
}
