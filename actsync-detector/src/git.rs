//! `git` command-line history source.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::{DetectError, HistorySource};

/// Lists files touched by a commit via `git log`.
///
/// `-m` expands merge commits against each parent so merged changes are
/// reported; the resulting duplicates are removed by the path filters.
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_dir: PathBuf,
}

impl GitCli {
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }

    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }
}

impl HistorySource for GitCli {
    fn changed_paths(&self, commit_ref: &str) -> Result<Vec<String>, DetectError> {
        let output = Command::new("git")
            .args([
                "-c",
                "core.quotepath=off",
                "log",
                "-m",
                "-1",
                "--name-only",
                "--pretty=format:",
                commit_ref,
                "--",
            ])
            .current_dir(&self.repo_dir)
            .output()
            .map_err(|source| DetectError::Spawn {
                dir: self.repo_dir.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(DetectError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let paths = parse_name_only(&stdout);
        tracing::debug!(commit = commit_ref, files = paths.len(), "read change list");
        Ok(paths)
    }
}

fn parse_name_only(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_separator_lines() {
        let out = "\nactions/a/main.py\n\nactions/b/config.yaml\n";
        assert_eq!(
            parse_name_only(out),
            vec!["actions/a/main.py", "actions/b/config.yaml"]
        );
    }
}
