//! Configuration for the interactive shell.
//!
//! Settings come from a JSON file and can be overridden by CLI flags:
//!
//! 1. `--config <path>` if given (the file must exist)
//! 2. `{config_dir}/taskq/config.json` if present
//! 3. Built-in defaults
//!
//! ```json
//! {
//!   "locale": "portuguese",
//!   "color": true,
//!   "clear_screen": false,
//!   "pause_after_action": true
//! }
//! ```

use crate::error::{Result, TaskqError};
use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Shell behaviour settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Language for labels and messages
    pub locale: Locale,

    /// Colorize output
    pub color: bool,

    /// Clear the terminal before drawing the menu
    pub clear_screen: bool,

    /// Wait for ENTER after each action
    pub pause_after_action: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            color: true,
            clear_screen: true,
            pause_after_action: true,
        }
    }
}

impl ShellConfig {
    /// Default user config path, `{config_dir}/taskq/config.json`.
    ///
    /// Returns `None` if the platform config directory cannot be determined.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("taskq").join("config.json"))
    }

    /// Resolve and load configuration.
    ///
    /// # Errors
    ///
    /// - [`TaskqError::MissingFile`] if `explicit` points at a missing file
    /// - [`TaskqError::Config`] if the file cannot be read or parsed
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(TaskqError::MissingFile {
                    path: path.to_path_buf(),
                });
            }
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns [`TaskqError::Config`] with the path if reading or parsing fails.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| {
            TaskqError::config_with_path(format!("cannot read file: {e}"), path.to_path_buf())
        })?;

        serde_json::from_str(&content).map_err(|e| {
            TaskqError::config_with_path(format!("invalid JSON: {e}"), path.to_path_buf())
        })
    }

    /// Override the locale.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Enable or disable color.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Enable or disable clearing the screen.
    #[must_use]
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Enable or disable the pause after each action.
    #[must_use]
    pub fn with_pause_after_action(mut self, pause: bool) -> Self {
        self.pause_after_action = pause;
        self
    }
}
