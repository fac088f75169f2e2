//! Editor configuration
//!
//! Provides configuration file handling and validation for the editor store.
//! Supports JSON and TOML file formats; every field has a default, so a file
//! only needs to name the settings it overrides.
//!
//! ```toml
//! history_limit = 100
//! default_background = "#fafafa"
//!
//! [nudge_offset]
//! dx = 10.0
//! dy = 10.0
//! ```

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use slidekit_core::Offset;
use std::path::{Path, PathBuf};

/// Snapshots kept by the undo history unless configured otherwise
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Name of the configuration file inside the config directory
pub const CONFIG_FILE_NAME: &str = "editor.toml";

const APP_DIR_NAME: &str = "slidekit";

/// Settings consumed by the editor store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum number of history snapshots retained
    pub history_limit: usize,
    /// Displacement applied to duplicated and pasted elements
    pub nudge_offset: Offset,
    /// Background colour for slides added before a presentation is loaded
    pub default_background: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            nudge_offset: Offset::NUDGE,
            default_background: "#ffffff".to_string(),
        }
    }
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the history depth
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Override the duplicate/paste nudge
    pub fn with_nudge_offset(mut self, offset: Offset) -> Self {
        self.nudge_offset = offset;
        self
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file (JSON or TOML, chosen by extension)
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config = match format {
            Format::Json => Self::from_json_str(&content)?,
            Format::Toml => Self::from_toml_str(&content)?,
        };
        tracing::debug!(path = %path.display(), "Loaded editor config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML, chosen by extension)
    pub fn save_to_file(&self, path: &Path) -> ConfigResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.history_limit == 0 {
            return Err(invalid("history_limit", "must be at least 1"));
        }

        let Offset { dx, dy } = self.nudge_offset;
        if !dx.is_finite() || !dy.is_finite() {
            return Err(invalid("nudge_offset", "must be finite"));
        }
        if !self.nudge_offset.is_nonzero() {
            return Err(invalid(
                "nudge_offset",
                "must move copies away from their source",
            ));
        }

        if self.default_background.trim().is_empty() {
            return Err(invalid("default_background", "must not be empty"));
        }

        Ok(())
    }

    /// Platform configuration directory for SlideKit
    pub fn config_dir() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(ConfigError::NoConfigDirectory)
    }

    /// Default location of the editor configuration file
    pub fn default_path() -> ConfigResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load from `path`, falling back to defaults when the file is missing
    /// or invalid
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "Ignoring editor config, using defaults"
                );
                Self::default()
            }
        }
    }
}

fn invalid(key: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidSetting {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
