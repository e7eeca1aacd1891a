//! Stats command - enumerates the registered repositories.
//!
//! The commit-statistics aggregation itself lives outside this tool; it
//! consumes the registry's paths. The default CLI path therefore reports
//! exactly that input: which repositories are on record for the given
//! email.

use crate::ScoutContext;
use crate::registry::Registry;
use anyhow::{Context, Result};
use colored::Colorize;

/// Lists the repositories the stats stage would inspect for `email`.
///
/// # Errors
///
/// Returns an error if the registry cannot be read.
pub fn execute(ctx: &ScoutContext, email: &str) -> Result<()> {
    let registry = Registry::open(ctx.registry_path.clone());
    let repos = registry.entries().with_context(|| {
        format!("Failed to read registry at {}", registry.path().display())
    })?;

    if repos.is_empty() {
        super::print_info("No repositories registered yet. Run `scout --add <folder>` first.");
        return Ok(());
    }

    println!("{}", format!("Repositories tracked for {email}:").bold());
    for repo in &repos {
        println!("  {repo}");
    }
    println!();
    super::print_info(&format!(
        "{} {} registered",
        repos.len(),
        if repos.len() == 1 {
            "repository"
        } else {
            "repositories"
        }
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScoutContext;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_stats_with_empty_registry_succeeds() {
        let temp = TempDir::new().unwrap();
        let ctx = ScoutContext::new_explicit(
            temp.path().join(".gitscout"),
            temp.path().join("config"),
        )
        .unwrap();

        execute(&ctx, "dev@example.com").unwrap();
    }

    #[test]
    fn test_stats_reads_seeded_registry() {
        let temp = TempDir::new().unwrap();
        let registry_path = temp.path().join(".gitscout");
        fs::write(&registry_path, "/a\n/b").unwrap();
        let ctx =
            ScoutContext::new_explicit(registry_path, temp.path().join("config")).unwrap();

        execute(&ctx, "dev@example.com").unwrap();
    }
}
