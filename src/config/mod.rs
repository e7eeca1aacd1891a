//! Configuration parsing and management.
//!
//! The configuration lives at `~/.config/gitscout/config` as TOML and is
//! created with defaults on first load. It carries the registry location
//! override and the default email handed to the stats stage.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Core settings (registry location).
    #[serde(default)]
    pub core: CoreConfig,

    /// User configuration (default email for the stats stage).
    #[serde(default)]
    pub user: UserConfig,
}

/// Core settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Location of the registry file.
    #[serde(default = "default_registry_path")]
    pub registry_path: PathBuf,
}

/// User identity settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserConfig {
    /// Email address used when the CLI does not supply one.
    pub email: Option<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            registry_path: default_registry_path(),
        }
    }
}

/// Default registry location: a dotfile directly under the home directory.
fn default_registry_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/tmp"));
    home.join(crate::DEFAULT_REGISTRY_FILE)
}

impl Config {
    /// Load configuration from a file.
    ///
    /// Creates the file with defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Cannot create parent directories
    /// - Cannot read the configuration file
    /// - Configuration file contains invalid TOML
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            return Ok(config);
        }

        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Cannot create parent directories
    /// - Cannot write to the file
    /// - TOML serialization fails
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(toml_str.as_bytes())?;
        Ok(())
    }
}
