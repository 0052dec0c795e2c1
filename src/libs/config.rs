//! Configuration management for the headcount application.
//!
//! The configuration is a small, hand-edited JSON file in the per-user
//! configuration directory (see [`Config::config_file`]). Every field has a
//! default, so the application runs without any setup; nothing writes the
//! file back.
//!
//! ## Settings
//!
//! - **`log_dir`**: Directory holding the daily `groups_log_*.json` files.
//!   Defaults to the working directory.
//! - **`clear_screen`**: Whether the terminal is cleared before the board is
//!   redrawn. Defaults to `true`.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use headcount::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Logs go to {}", config.log_dir().display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file name inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

const APP_DIR_NAME: &str = "headcount";

/// Directory used for daily logs when none is configured.
pub const DEFAULT_LOG_DIR: &str = ".";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Directory for the daily log files.
    ///
    /// `None` means the current working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Clear the terminal before redrawing the board.
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
}

fn default_clear_screen() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_dir: None,
            clear_screen: default_clear_screen(),
        }
    }
}

impl Config {
    /// Per-user configuration directory.
    ///
    /// - **Windows**: `%APPDATA%\headcount`
    /// - **Elsewhere**: `$XDG_CONFIG_HOME/headcount`, or `~/.config/headcount`
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            return PathBuf::from(appdata).join(APP_DIR_NAME);
        }
        match env::var_os("XDG_CONFIG_HOME") {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir).join(APP_DIR_NAME),
            _ => {
                let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".config").join(APP_DIR_NAME)
            }
        }
    }

    /// Full path of the configuration file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    /// Reads the configuration from [`Config::config_file`].
    ///
    /// # Errors
    ///
    /// - **Missing file**: Returns the default configuration (not an error)
    /// - **Corrupted file**: Returns a parsing error
    /// - **Permission issues**: Returns a filesystem error
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::config_file())
    }

    /// Reads the configuration from an explicit file.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Reads the configuration, warning and falling back to defaults when it
    /// cannot be loaded.
    pub fn read_or_default() -> Config {
        match Self::read() {
            Ok(config) => config,
            Err(err) => {
                msg_warning!(Message::ConfigParseError(err.to_string()));
                Config::default()
            }
        }
    }

    /// Effective directory for the daily log files.
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR))
    }
}
