//
//  tc-goggles
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Persistent defaults for the `tcg` CLI, stored as TOML.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/tcg/config.toml`
//! - **macOS**: `~/Library/Application Support/tcg/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\tcg\config.toml`
//!
//! The `TCG_CONFIG` environment variable overrides the location.
//!
//! ## Example Configuration File
//!
//! ```toml
//! server = "https://ci.example.com"
//! username = "jane"
//! ```
//!
//! Secrets (tokens, passwords) are never written to this file; they come from
//! the environment or the command line.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable overriding the configuration file path.
pub const CONFIG_ENV: &str = "TCG_CONFIG";

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const KEYS: &[&str] = &["server", "username"];

/// Configuration for the TeamCity CLI.
///
/// All fields are optional so that a partial or missing file still loads.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Default TeamCity server, used when `--server`/`TEAMCITY_SERVER` is not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,

    /// Default username for basic authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Config {
    /// Loads configuration from the default location.
    ///
    /// A missing file is not an error; defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from `path`, defaulting when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Returns the path to the configuration file.
    ///
    /// The file may not exist; this only returns where it would be.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Gets a value by key. Unknown keys and unset values return `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "server" => self.server.clone(),
            "username" => self.username.clone(),
            _ => None,
        }
    }

    /// Sets a value by key.
    ///
    /// # Errors
    ///
    /// Fails for unknown keys and for a `server` that is not an absolute
    /// http(s) URL.
    pub fn set(&mut self, key: &str, value: String) -> Result<()> {
        match key {
            "server" => {
                validate_server(&value)?;
                self.server = Some(value);
            }
            "username" => self.username = Some(value),
            _ => anyhow::bail!("Unknown config key '{}'. Valid keys: {}", key, KEYS.join(", ")),
        }
        Ok(())
    }

    /// Clears a value by key. Returns `false` for unknown keys.
    pub fn unset(&mut self, key: &str) -> bool {
        match key {
            "server" => self.server = None,
            "username" => self.username = None,
            _ => return false,
        }
        true
    }

    /// All set values, in key order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

/// Checks that `server` is an absolute http(s) URL.
pub fn validate_server(server: &str) -> Result<()> {
    let url = Url::parse(server).with_context(|| format!("Invalid server URL '{server}'"))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => anyhow::bail!("Unsupported URL scheme '{}' in '{}'", scheme, server),
    }
}
