use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::git::WorktreeEntry;

/// The worktree name is whatever follows the container segment in the
/// path: `/home/u/alicenode_inhabitat/feature-x` yields `feature-x` for
/// marker `alicenode_inhabitat`. Paths without the segment, and paths
/// that end at it, carry no name.
pub(crate) fn extract_worktree_name(path: &Path, marker: &str) -> Option<String> {
    let raw = path.to_string_lossy();
    let needle = format!("{marker}/");
    let (_, rest) = raw.split_once(needle.as_str())?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.to_string())
}

pub(crate) fn collect_worktree_names(entries: &[WorktreeEntry], marker: &str) -> Vec<String> {
    entries
        .iter()
        .filter_map(|entry| extract_worktree_name(&entry.path, marker))
        .collect()
}

/// A missing file counts as already reset; the first run on a fresh
/// checkout has no previous list to discard.
pub(crate) fn reset_list_file(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err)
            .with_context(|| format!("failed to remove previous list file {}", path.display())),
    }
}

/// Single buffered write, one name per line. The client owns the target
/// directory; it is never created here.
pub(crate) fn write_list_file(path: &Path, names: &[String]) -> Result<()> {
    let mut contents = String::new();
    for name in names {
        contents.push_str(name);
        contents.push('\n');
    }
    fs::write(path, contents)
        .with_context(|| format!("failed to write list file {}", path.display()))
}
