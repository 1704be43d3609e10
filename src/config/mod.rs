//
//  graph-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loading, saving and accessing the `graph` configuration file.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/graph/config.toml`
//! - **macOS**: `~/Library/Application Support/graph/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\graph\config.toml`
//!
//! The `GRAPH_CONFIG` environment variable overrides the location.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [api]
//! base_url = "https://graph.microsoft.com/v1.0"
//! timeout_secs = 30
//! token_env = "GRAPH_ACCESS_TOKEN"
//! default_user = "adele@contoso.com"
//!
//! [output]
//! format = "json"
//! ```
//!
//! Command-line flags always win over the file.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use graph_client::config::Config;
//!
//! let mut config = Config::load()?;
//! config.set("default_user", "adele@contoso.com".to_string());
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod file;

pub use file::*;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "GRAPH_CONFIG";

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const KEYS: &[&str] = &[
    "base_url",
    "timeout_secs",
    "token_env",
    "default_user",
    "format",
];

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// API connection settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Output preferences.
    #[serde(default)]
    pub output: OutputConfig,
}

/// API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL every path is appended to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Name of an environment variable holding the access token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_env: Option<String>,

    /// User id or principal name substituted for `user_id` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_user: Option<String>,
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout(),
            token_env: None,
            default_user: None,
        }
    }
}

/// Output preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// One of `json`, `yaml` or `table`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "json".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Returns the path of the configuration file.
    ///
    /// `GRAPH_CONFIG` wins when set and non-empty.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", "graph")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Gets a configuration value by key.
    ///
    /// # Returns
    ///
    /// `None` for unknown keys and for unset optional values.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "base_url" => self.api.base_url.clone(),
            "timeout_secs" => Some(self.api.timeout_secs.to_string()),
            "token_env" => self.api.token_env.clone(),
            "default_user" => self.api.default_user.clone(),
            "format" => Some(self.output.format.clone()),
            _ => None,
        }
    }

    /// Sets a configuration value by key.
    ///
    /// # Returns
    ///
    /// `false` when the key is unknown or the value is invalid for the key.
    pub fn set(&mut self, key: &str, value: String) -> bool {
        match key {
            "base_url" => {
                if url::Url::parse(&value).is_err() {
                    return false;
                }
                self.api.base_url = Some(value);
                true
            }
            "timeout_secs" => match value.parse() {
                Ok(secs) => {
                    self.api.timeout_secs = secs;
                    true
                }
                Err(_) => false,
            },
            "token_env" => {
                self.api.token_env = Some(value);
                true
            }
            "default_user" => {
                self.api.default_user = Some(value);
                true
            }
            "format" => {
                if !matches!(value.as_str(), "json" | "yaml" | "table") {
                    return false;
                }
                self.output.format = value;
                true
            }
            _ => false,
        }
    }
}
