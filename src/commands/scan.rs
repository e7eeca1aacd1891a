//! Scan command - discovers git repositories and records them in the registry.

use crate::ScoutContext;
use crate::output;
use crate::registry::Registry;
use crate::scanner;
use crate::utils::paths::{expand_tilde, make_absolute};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Scans `folder` for git repositories and merges the discovered roots
/// into the registry.
///
/// Each repository is printed as it is found. The folder argument accepts
/// `~` and relative paths; discovered roots are recorded in absolute form
/// so the same repository dedups across invocations from different
/// working directories.
///
/// # Errors
///
/// Returns an error if the folder cannot be scanned or the registry
/// cannot be updated.
pub fn execute(ctx: &ScoutContext, folder: &Path) -> Result<()> {
    let folder = expand_tilde(folder)?;
    let folder = make_absolute(&folder)?;

    info!("Scanning {}", folder.display());
    println!("{}", "Found repositories:".bold());

    let repos = scanner::find_repositories_with(&folder, |repo| {
        println!("{}", repo.display());
    })
    .with_context(|| format!("Failed to scan {}", folder.display()))?;

    if repos.is_empty() {
        output::info(&format!(
            "No git repositories found under {}",
            folder.display()
        ));
    }

    let discovered: Vec<String> = repos.iter().map(|p| p.display().to_string()).collect();

    let registry = Registry::open(ctx.registry_path.clone());
    let report = registry.merge(&discovered).with_context(|| {
        format!("Failed to update registry at {}", registry.path().display())
    })?;
    output::verbose(&format!("Registry file: {}", registry.path().display()));

    println!();
    super::print_success(&format!(
        "Added {} new {} ({} tracked)",
        report.added,
        if report.added == 1 {
            "repository"
        } else {
            "repositories"
        },
        report.total
    ));

    Ok(())
}
