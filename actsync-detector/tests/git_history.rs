//! `GitCli` against real throwaway repositories.
//!
//! Each test builds its own repository in a `TempDir`. Tests return early when
//! no `git` binary is on `PATH`.

use std::fs;
use std::path::Path;
use std::process::Command;

use actsync_core::Settings;
use actsync_detector::{ChangeDetector, GitCli, HistorySource};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn git_available() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args([
            "-c",
            "user.name=actsync",
            "-c",
            "user.email=actsync@example.com",
            "-c",
            "commit.gpgsign=false",
            "-c",
            "init.defaultBranch=main",
        ])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn write(dir: &Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, content).expect("write");
}

fn commit_all(dir: &Path, message: &str) {
    git(dir, &["add", "-A"]);
    git(dir, &["commit", "-q", "-m", message]);
}

fn repo_with_two_commits() -> TempDir {
    let repo = TempDir::new().expect("tempdir");
    let dir = repo.path();
    git(dir, &["init", "-q"]);
    write(dir, "actions/a/config.yaml", "description: a\n");
    write(dir, "actions/a/main.py", "print('a')\n");
    write(dir, "other/file.txt", "v1\n");
    commit_all(dir, "initial");

    write(dir, "actions/a/config.yaml", "description: a2\n");
    write(dir, "actions/b/main.py", "print('b')\n");
    write(dir, "other/file.txt", "v2\n");
    commit_all(dir, "touch a and b");
    repo
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn head_commit_folders_and_files() {
    if !git_available() {
        return;
    }
    let repo = repo_with_two_commits();
    let source = GitCli::new(repo.path());
    let settings = Settings::default().with_repo_dir(repo.path());
    let detector = ChangeDetector::new(&source, &settings);

    let mut folders = detector.list_changed_action_folders();
    folders.sort();
    assert_eq!(folders, vec!["actions/a", "actions/b"]);
    assert_eq!(detector.list_changed_files_in("actions/a"), vec!["config.yaml"]);
    assert_eq!(detector.list_changed_files_in("actions/b/"), vec!["main.py"]);
}

#[test]
fn commit_ref_override_selects_older_commit() {
    if !git_available() {
        return;
    }
    let repo = repo_with_two_commits();
    let source = GitCli::new(repo.path());
    let settings = Settings::default()
        .with_repo_dir(repo.path())
        .with_commit_ref("HEAD~1");
    let detector = ChangeDetector::new(&source, &settings);

    assert_eq!(detector.list_changed_action_folders(), vec!["actions/a"]);
    let mut files = detector.list_changed_files_in("actions/a");
    files.sort();
    assert_eq!(files, vec!["config.yaml", "main.py"]);
}

#[test]
fn merge_commit_reports_merged_changes() {
    if !git_available() {
        return;
    }
    let repo = repo_with_two_commits();
    let dir = repo.path();
    git(dir, &["checkout", "-q", "-b", "feature"]);
    write(dir, "actions/c/main.py", "print('c')\n");
    commit_all(dir, "add c");
    git(dir, &["checkout", "-q", "main"]);
    write(dir, "README.md", "docs\n");
    commit_all(dir, "docs");
    git(dir, &["merge", "-q", "--no-ff", "-m", "merge feature", "feature"]);

    let source = GitCli::new(dir);
    let settings = Settings::default().with_repo_dir(dir);
    let detector = ChangeDetector::new(&source, &settings);
    assert!(
        detector
            .list_changed_action_folders()
            .contains(&"actions/c".to_string()),
        "merge must surface actions/c"
    );
}

#[test]
fn not_a_repository_is_an_error_but_detector_is_empty() {
    if !git_available() {
        return;
    }
    let dir = TempDir::new().expect("tempdir");
    let source = GitCli::new(dir.path());
    assert!(source.changed_paths("HEAD").is_err());

    let settings = Settings::default().with_repo_dir(dir.path());
    let detector = ChangeDetector::new(&source, &settings);
    assert!(detector.list_changed_action_folders().is_empty());
}
