#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # Gitscout - Local Git Repository Discovery
//!
//! Gitscout walks a folder tree looking for git repository roots and keeps
//! a deduplicated registry of their paths on disk. The registry feeds a
//! separate contribution-statistics stage, which only needs an up-to-date
//! list of repositories to inspect.
//!
//! ## Architecture
//!
//! The codebase is organized into several key modules:
//!
//! - [`scanner`]: Filesystem traversal that locates repository roots
//! - [`registry`]: The persisted, deduplicated list of known repositories
//! - [`commands`]: Command implementations behind the CLI surface
//! - [`config`]: Configuration parsing and defaults
//! - [`output`]: Output formatting, styling, and verbosity control
//! - [`cli`]: Command-line argument definitions (shared with xtask)
//!
//! ## Example Usage
//!
//! ```no_run
//! use gitscout::ScoutContext;
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = ScoutContext::new()?;
//!
//! // Scan a folder and record every repository found under it
//! gitscout::commands::scan::execute(&ctx, std::path::Path::new("~/projects"))?;
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Commands module containing all CLI command implementations.
pub mod commands;

/// Configuration parsing and management.
pub mod config;

/// Output formatting and verbosity control.
pub mod output;

/// Persisted registry of discovered repository roots.
pub mod registry;

/// Filesystem scanning for git repository roots.
pub mod scanner;

/// Utility functions and helpers.
pub mod utils;

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Current version of the gitscout binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the registry dotfile within the home directory.
pub const DEFAULT_REGISTRY_FILE: &str = ".gitscout";

/// Default configuration file path relative to home directory.
pub const DEFAULT_CONFIG_PATH: &str = ".config/gitscout/config";

/// Email used by the stats stage when neither the CLI nor the
/// configuration supplies one.
pub const DEFAULT_EMAIL: &str = "your@email.com";

/// Central context for all gitscout operations.
///
/// Holds the resolved registry location and the loaded configuration.
/// Constructed once in `main` and threaded through the commands.
#[derive(Debug, Clone)]
pub struct ScoutContext {
    /// Path to the registry file.
    pub registry_path: PathBuf,

    /// Path to the configuration file.
    pub config_path: PathBuf,

    /// Loaded configuration settings.
    pub config: config::Config,
}

impl ScoutContext {
    /// Creates a new `ScoutContext` by loading the configuration from the
    /// default path.
    ///
    /// The registry location is resolved in order of precedence:
    /// `GITSCOUT_REGISTRY` environment variable, `core.registry_path` from
    /// the configuration file, then `~/.gitscout`.
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined or if
    /// the configuration file cannot be read or created.
    pub fn new() -> Result<Self> {
        // Check environment variable for config path first
        let config_path = if let Ok(path) = std::env::var("GITSCOUT_CONFIG_PATH") {
            PathBuf::from(path)
        } else {
            let home = dirs::home_dir().context("Could not find home directory")?;
            home.join(DEFAULT_CONFIG_PATH)
        };

        let config = config::Config::load(&config_path)?;

        // Allow environment variable to override the configured registry path
        let registry_path = if let Ok(path) = std::env::var("GITSCOUT_REGISTRY") {
            PathBuf::from(path)
        } else {
            config.core.registry_path.clone()
        };

        Ok(Self {
            registry_path,
            config_path,
            config,
        })
    }

    /// Creates a new `ScoutContext` with explicit paths for testing.
    /// This avoids the need for environment variable manipulation.
    ///
    /// # Errors
    /// Returns an error if the configuration cannot be loaded or created.
    pub fn new_explicit(registry_path: PathBuf, config_path: PathBuf) -> Result<Self> {
        let config = if config_path.exists() {
            config::Config::load(&config_path)?
        } else {
            let mut config = config::Config::default();
            config.core.registry_path.clone_from(&registry_path);

            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            config.save(&config_path)?;
            config
        };

        Ok(Self {
            registry_path,
            config_path,
            config,
        })
    }
}
