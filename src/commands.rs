use crate::cli::Commands;
use crate::config::Config;
use crate::git::{list_worktrees, prune_worktrees, repo_root};
use crate::process::{binary_available, first_line, run_capture};
use crate::sync::{collect_worktree_names, extract_worktree_name, reset_list_file, write_list_file};
use crate::ui::progress;
use anyhow::{Result, bail};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub(crate) fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Sync {
            repo,
            output,
            marker,
        } => cmd_sync(config, repo.as_deref(), output.as_deref(), marker.as_deref()),
        Commands::Status { json, repo, marker } => {
            cmd_status(config, json, repo.as_deref(), marker.as_deref())
        }
        Commands::Doctor { repo, output } => cmd_doctor(config, repo.as_deref(), output.as_deref()),
    }
}

fn effective_marker<'a>(config: &'a Config, flag: Option<&'a str>) -> Result<&'a str> {
    let marker = flag.unwrap_or(&config.marker);
    if marker.trim().is_empty() {
        bail!("marker segment must not be empty");
    }
    Ok(marker)
}

fn effective_list_path(config: &Config, flag: Option<&Path>) -> PathBuf {
    flag.map(Path::to_path_buf)
        .unwrap_or_else(|| config.list_path.clone())
}

fn cmd_sync(
    config: &Config,
    repo: Option<&Path>,
    output: Option<&Path>,
    marker: Option<&str>,
) -> Result<()> {
    let marker = effective_marker(config, marker)?;
    let list_path = effective_list_path(config, output);
    let repo_root = repo_root(repo)?;
    sync_worktree_list(&repo_root, marker, &list_path)
}

pub(crate) fn sync_worktree_list(repo_root: &Path, marker: &str, list_path: &Path) -> Result<()> {
    progress("sync: pruning stale worktree records");
    if let Err(err) = prune_worktrees(repo_root) {
        eprintln!("warning: {err:#}");
    }

    progress("sync: listing git worktrees");
    let entries = list_worktrees(repo_root)?;
    let names = collect_worktree_names(&entries, marker);
    let skipped = entries.len() - names.len();

    reset_list_file(list_path)?;
    write_list_file(list_path, &names)?;

    progress(&format!(
        "sync: wrote {} worktree name(s) to {}",
        names.len(),
        list_path.display()
    ));
    if skipped > 0 {
        progress(&format!(
            "sync: skipped {skipped} worktree(s) outside `{marker}/`"
        ));
    }
    Ok(())
}

#[derive(Debug)]
struct StatusRow {
    index: usize,
    name: Option<String>,
    branch: Option<String>,
    path: PathBuf,
}

#[derive(Debug, Serialize)]
struct JsonStatusRow {
    index: usize,
    name: Option<String>,
    branch: Option<String>,
    path: String,
    listed: bool,
}

fn cmd_status(
    config: &Config,
    as_json: bool,
    repo: Option<&Path>,
    marker: Option<&str>,
) -> Result<()> {
    let marker = effective_marker(config, marker)?;
    let repo_root = repo_root(repo)?;
    progress("status: scanning git worktrees");
    let entries = list_worktrees(&repo_root)?;
    let rows: Vec<StatusRow> = entries
        .into_iter()
        .enumerate()
        .map(|(offset, entry)| StatusRow {
            index: offset + 1,
            name: extract_worktree_name(&entry.path, marker),
            branch: entry.branch,
            path: entry.path,
        })
        .collect();

    if as_json {
        let json_rows: Vec<JsonStatusRow> = rows
            .iter()
            .map(|row| JsonStatusRow {
                index: row.index,
                name: row.name.clone(),
                branch: row.branch.clone(),
                path: row.path.display().to_string(),
                listed: row.name.is_some(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No worktrees reported by git");
        return Ok(());
    }

    println!("{:<4} {:<24} {:<24} PATH", "IDX", "NAME", "BRANCH");
    for row in rows {
        println!(
            "{:<4} {:<24} {:<24} {}",
            row.index,
            row.name.as_deref().unwrap_or("-"),
            row.branch.as_deref().unwrap_or("(detached)"),
            row.path.display()
        );
    }
    Ok(())
}

#[derive(Debug)]
struct Check {
    name: String,
    ok: bool,
    detail: String,
    fix: Option<String>,
}

impl Check {
    fn ok(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ok: true,
            detail: detail.into(),
            fix: None,
        }
    }

    fn fail(name: impl Into<String>, detail: impl Into<String>, fix: Option<String>) -> Self {
        Self {
            name: name.into(),
            ok: false,
            detail: detail.into(),
            fix,
        }
    }

    fn print(&self) {
        let state = if self.ok { "OK" } else { "FAIL" };
        println!("[{state}] {}: {}", self.name, self.detail);
        if let Some(fix) = &self.fix {
            println!("      fix: {fix}");
        }
    }
}

fn cmd_doctor(config: &Config, repo: Option<&Path>, output: Option<&Path>) -> Result<()> {
    progress("doctor: running environment checks");
    let list_path = effective_list_path(config, output);
    let mut checks = Vec::new();
    let mut failed = false;

    if binary_available("git") {
        checks.push(Check::ok("git installed", "`git --version` works"));
    } else {
        failed = true;
        checks.push(Check::fail(
            "git installed",
            "`git` is not callable",
            Some("install git and ensure it is on PATH".to_string()),
        ));
    }

    let repo_root = match repo_root(repo) {
        Ok(path) => {
            checks.push(Check::ok(
                "Inside git repo",
                format!("repo root: {}", path.display()),
            ));
            Some(path)
        }
        Err(err) => {
            failed = true;
            checks.push(Check::fail(
                "Inside git repo",
                format!("{err:#}"),
                Some("cd <your-repo> or pass --repo".to_string()),
            ));
            None
        }
    };

    if let Some(root) = &repo_root {
        match run_capture("git", &["worktree", "list"], Some(root)) {
            Ok(output) if output.status.success() => {
                checks.push(Check::ok(
                    "git worktree support",
                    "`git worktree list` works".to_string(),
                ));
            }
            Ok(output) => {
                failed = true;
                checks.push(Check::fail(
                    "git worktree support",
                    first_line(&output.stderr),
                    Some("upgrade git to a version with worktree support".to_string()),
                ));
            }
            Err(err) => {
                failed = true;
                checks.push(Check::fail(
                    "git worktree support",
                    err.to_string(),
                    Some("ensure git is installed and callable".to_string()),
                ));
            }
        }
    }

    if config.marker.trim().is_empty() {
        failed = true;
        checks.push(Check::fail(
            "marker segment configured",
            "marker is empty".to_string(),
            Some("set `marker` in the wtsync config file".to_string()),
        ));
    } else {
        checks.push(Check::ok(
            "marker segment configured",
            format!("`{}`", config.marker),
        ));
    }

    let list_dir = match list_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if list_dir.is_dir() {
        checks.push(Check::ok(
            "client list directory",
            format!("found {}", list_dir.display()),
        ));
    } else {
        failed = true;
        checks.push(Check::fail(
            "client list directory",
            format!("{} does not exist", list_dir.display()),
            Some(format!("mkdir -p {}", list_dir.display())),
        ));
    }

    for check in checks {
        check.print();
    }

    if failed {
        bail!("doctor found failing checks")
    } else {
        Ok(())
    }
}
