use crate::process::{best_error_line, run_capture};
use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

pub(crate) fn repo_root(cwd: Option<&Path>) -> Result<PathBuf> {
    let output = run_capture("git", &["rev-parse", "--show-toplevel"], cwd)
        .context("failed to run git to detect repo root")?;
    if !output.status.success() {
        match cwd {
            Some(path) => bail!("{} is not inside a git repository", path.display()),
            None => bail!("not inside a git repository"),
        }
    }
    let root = output.stdout.trim();
    if root.is_empty() {
        bail!("git did not return a repository root");
    }
    Ok(PathBuf::from(root))
}

/// Drops administrative records for worktrees whose directories are gone.
pub(crate) fn prune_worktrees(repo_root: &Path) -> Result<()> {
    let output = run_capture("git", &["worktree", "prune"], Some(repo_root))
        .context("failed to run git worktree prune")?;
    if !output.status.success() {
        bail!(
            "git worktree prune failed: {}",
            best_error_line(&output.stderr)
        );
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WorktreeEntry {
    pub(crate) path: PathBuf,
    pub(crate) branch: Option<String>,
}

pub(crate) fn list_worktrees(repo_root: &Path) -> Result<Vec<WorktreeEntry>> {
    let output = run_capture("git", &["worktree", "list", "--porcelain"], Some(repo_root))
        .context("failed to list git worktrees")?;
    if !output.status.success() {
        bail!(
            "failed to list git worktrees: {}",
            best_error_line(&output.stderr)
        );
    }
    Ok(parse_worktree_porcelain(&output.stdout))
}

/// Porcelain records are `key value` lines separated by a blank line. Only
/// the `worktree` path and `branch` attributes are read; detached records
/// keep `branch: None`, and a block without a `worktree` line is dropped.
pub(crate) fn parse_worktree_porcelain(raw: &str) -> Vec<WorktreeEntry> {
    let mut entries = Vec::new();
    for record in raw.split("\n\n") {
        let mut path = None;
        let mut branch = None;
        for line in record.lines() {
            if let Some(value) = line.strip_prefix("worktree ") {
                path = Some(PathBuf::from(value.trim()));
            } else if let Some(value) = line.strip_prefix("branch ") {
                branch = value.trim().strip_prefix("refs/heads/").map(str::to_string);
            }
        }
        if let Some(path) = path {
            entries.push(WorktreeEntry { path, branch });
        }
    }
    entries
}
