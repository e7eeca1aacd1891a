//! Filesystem scanning for git repository roots.
//!
//! A repository root is a directory that directly contains a `.git`
//! metadata directory. The scan is a pre-order walk of the subtree below
//! a starting folder with two pruning rules:
//!
//! - the `.git` subtree itself is never entered (its parent is recorded
//!   as a repository root instead);
//! - dependency directories (`vendor`, `node_modules`) are never entered.
//!
//! A repository's ordinary subdirectories ARE still traversed, so
//! repositories nested under another repository's working tree are found.
//!
//! The walk is all-or-nothing: any directory that cannot be listed aborts
//! the whole scan with an error. There is no skip-and-continue mode.

use anyhow::{Context, Result, bail};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Name of the metadata directory that marks a repository root.
pub const GIT_DIR: &str = ".git";

/// Directory names that are never descended into.
///
/// Dependency-manager caches routinely contain vendored repositories that
/// the user does not own; anything below these names is invisible to the
/// scan regardless of content.
pub const EXCLUDED_DIRS: &[&str] = &["vendor", "node_modules"];

/// Finds every repository root under `root`.
///
/// Results are in pre-order traversal order with siblings visited in
/// file-name order. Each physical directory is visited once, so the
/// returned sequence contains no duplicates.
///
/// # Errors
///
/// Returns an error if `root` is not a directory or if any directory in
/// the subtree cannot be listed.
pub fn find_repositories(root: &Path) -> Result<Vec<PathBuf>> {
    find_repositories_with(root, |_| {})
}

/// Finds every repository root under `root`, invoking `on_found` for each
/// one as it is discovered.
///
/// The observer exists for progress reporting only; the functional result
/// is the returned sequence.
///
/// # Errors
///
/// Returns an error if `root` is not a directory or if any directory in
/// the subtree cannot be listed.
pub fn find_repositories_with<F>(root: &Path, mut on_found: F) -> Result<Vec<PathBuf>>
where
    F: FnMut(&Path),
{
    let root = crate::utils::paths::strip_trailing_separator(root);

    if !root.is_dir() {
        bail!("Not a directory: {}", root.display());
    }

    let mut found = Vec::new();
    let mut walker = WalkDir::new(&root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry
            .with_context(|| format!("Failed to scan directory tree under {}", root.display()))?;

        // The starting folder itself is only a container; pruning rules
        // apply to entries below it, matching a scan that inspects child
        // names at each level.
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name();
        if name == OsStr::new(GIT_DIR) {
            if let Some(repo) = entry.path().parent() {
                debug!(repo = %repo.display(), "found repository root");
                on_found(repo);
                found.push(repo.to_path_buf());
            }
            // Record the parent, never look inside the metadata directory.
            walker.skip_current_dir();
        } else if EXCLUDED_DIRS.iter().any(|excluded| name == OsStr::new(excluded)) {
            walker.skip_current_dir();
        }
    }

    debug!(count = found.len(), root = %root.display(), "scan complete");
    Ok(found)
}
