//! Command implementations for the scout CLI.

/// Scan a folder and record discovered repositories in the registry.
pub mod scan;

/// List the registered repositories the stats stage consumes.
pub mod stats;

use colored::Colorize;

/// Prints a final success line with a green check mark.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Prints a neutral informational line with a blue marker.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
