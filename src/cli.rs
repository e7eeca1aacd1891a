//! Command-line interface definitions for gitscout.
//!
//! This module contains the CLI argument parsing structure using clap's
//! derive macros. The definition is shared between the main binary and
//! build tools (like xtask) for man page generation.
//!
//! Note: Field-level documentation is provided via clap attributes, so we
//! allow missing_docs for this module to avoid redundant documentation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use clap::Parser;
use std::path::PathBuf;

/// Main CLI structure for gitscout.
///
/// The tool has two mutually exclusive paths: supplying `--add` runs a
/// scan and returns immediately; otherwise the default stats path runs.
#[derive(Parser)]
#[command(
    name = "scout",
    version = crate::VERSION,
    about = "Discover local git repositories and keep a registry of their paths",
    long_about = "Scans a folder tree for git repositories and records their roots in a \
                  registry file consumed by the contribution-statistics stage"
)]
pub struct Cli {
    /// Folder to scan for git repositories; discovered roots are added to the registry
    #[arg(short, long, value_name = "FOLDER")]
    pub add: Option<PathBuf>,

    /// Email address the stats stage filters contributions by
    #[arg(short, long, env = "GITSCOUT_EMAIL")]
    pub email: Option<String>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress informational messages
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
