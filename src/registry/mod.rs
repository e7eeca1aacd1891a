//! Persisted registry of discovered repository roots.
//!
//! The registry is a plain UTF-8 text file, one repository path per line,
//! living at `~/.gitscout` by default. It is append-only from the tool's
//! perspective: merges add paths that are not already present and never
//! remove or reorder existing entries.
//!
//! A merge is a read-everything/write-everything sequence held under an
//! exclusive advisory lock, so two concurrent invocations against the same
//! registry file cannot lose each other's additions.

use anyhow::{Context, Result};
use fs4::fs_std::FileExt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Summary of a completed merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeReport {
    /// Number of paths appended by this merge.
    pub added: usize,
    /// Total unique entries in the registry after the merge.
    pub total: usize,
}

/// Handle to a registry file.
#[derive(Debug, Clone)]
pub struct Registry {
    /// Location of the registry file on disk.
    path: PathBuf,
}

impl Registry {
    /// Creates a handle to the registry at `path`.
    ///
    /// The file itself is created lazily on first access.
    #[must_use]
    pub const fn open(path: PathBuf) -> Self {
        Self { path }
    }

    /// Location of the registry file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all entries currently in the registry, in file order.
    ///
    /// An absent registry file is created empty first, so a fresh
    /// installation reads as zero entries rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or read.
    pub fn entries(&self) -> Result<Vec<String>> {
        self.ensure_exists()?;
        let data = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read registry file: {}", self.path.display()))?;
        Ok(parse_entries(&data))
    }

    /// Merges newly discovered repository paths into the registry.
    ///
    /// The whole read-merge-rewrite sequence runs under an exclusive
    /// advisory lock on the registry file, so concurrent invocations
    /// serialize instead of losing updates. Entries already present keep
    /// their relative order; new paths are appended in the order given,
    /// skipping any that already exist (exact string equality).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created, locked, read, or
    /// rewritten.
    pub fn merge(&self, discovered: &[String]) -> Result<MergeReport> {
        self.ensure_exists()?;

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open registry file: {}", self.path.display()))?;

        file.lock_exclusive()
            .context("Failed to acquire exclusive lock on registry file")?;

        // Read through the path rather than the handle so the handle's
        // write cursor stays at the start of the file.
        let data = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read registry file: {}", self.path.display()))?;
        let mut entries = parse_entries(&data);

        let added = merge_new_entries(&mut entries, discovered);
        let content = entries.join("\n");

        file.set_len(0).context("Failed to truncate registry file")?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write registry file: {}", self.path.display()))?;
        file.flush().context("Failed to flush registry file")?;

        file.unlock().context("Failed to unlock registry file")?;

        debug!(added, total = entries.len(), "registry merge complete");
        Ok(MergeReport {
            added,
            total: entries.len(),
        })
    }

    /// Creates the registry file, empty, if it does not exist yet.
    fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create registry directory: {}", parent.display())
            })?;
        }
        std::fs::write(&self.path, [])
            .with_context(|| format!("Failed to create registry file: {}", self.path.display()))
    }
}

/// Splits registry file content into entries, one per line.
///
/// A trailing newline produces the same entries as its absence, so a
/// rewrite of what was read reproduces the original lines.
#[must_use]
pub fn parse_entries(data: &str) -> Vec<String> {
    data.lines().map(str::to_owned).collect()
}

/// Appends each discovered path that no existing entry equals exactly.
///
/// Linear scan per candidate; repository counts are small enough that the
/// quadratic worst case is irrelevant. Returns the number appended.
pub fn merge_new_entries(entries: &mut Vec<String>, discovered: &[String]) -> usize {
    let mut added = 0;
    for candidate in discovered {
        if !entries.iter().any(|existing| existing == candidate) {
            entries.push(candidate.clone());
            added += 1;
        }
    }
    added
}
