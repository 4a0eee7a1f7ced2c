//! Console configuration.
//!
//! [`ConsoleConfig`] is loaded from `~/.termkit/config.yaml`. A missing file
//! yields the built-in defaults, so the tool works without any setup.
//!
//! # Example YAML
//!
//! ```yaml
//! wrap_width: 100
//! prompt_indent: 2
//! color: never
//! line_editor: false
//! history_dir: /tmp/termkit-history
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::ColorMode;
use crate::errors::ConsoleError;
use crate::wrap::DEFAULT_WRAP_WIDTH;

/// Indent applied to prompt text.
pub const DEFAULT_PROMPT_INDENT: usize = 4;

/// Name of the per-user directory under `$HOME`.
pub const CONFIG_DIR_NAME: &str = ".termkit";

/// Settings for the console helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Total wrap width for prompt text.
    pub wrap_width: usize,

    /// Indent for prompt text.
    pub prompt_indent: usize,

    /// Color output mode.
    pub color: ColorMode,

    /// Allow the bash line editor for prompts that carry a history key.
    pub line_editor: bool,

    /// Base directory for relative history keys.
    ///
    /// Defaults to `~/.termkit/history`.
    pub history_dir: Option<PathBuf>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            prompt_indent: DEFAULT_PROMPT_INDENT,
            color: ColorMode::Auto,
            line_editor: true,
            history_dir: None,
        }
    }
}

impl ConsoleConfig {
    /// Load the configuration from the default location
    /// (`~/.termkit/config.yaml`).
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidConfig`] if the file exists but cannot
    /// be parsed or is invalid.
    pub fn load_default() -> Result<Self, ConsoleError> {
        match Self::default_path() {
            Some(path) => Self::from_path(&path),
            None => {
                tracing::debug!("Could not determine home directory, using default config");
                Ok(Self::default())
            }
        }
    }

    /// Load the configuration from a specific path.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidConfig`] if the file exists but cannot
    /// be read, parsed, or validated.
    pub fn from_path(path: &Path) -> Result<Self, ConsoleError> {
        if !path.exists() {
            tracing::debug!("Config not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            ConsoleError::InvalidConfig(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| {
            ConsoleError::InvalidConfig(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        for warning in config.validate()? {
            tracing::warn!("Config warning: {}", warning);
        }

        tracing::debug!(path = %path.display(), "Loaded console config");
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Returns non-fatal warnings; fatal problems are returned as errors.
    pub fn validate(&self) -> Result<Vec<String>, ConsoleError> {
        if self.wrap_width == 0 {
            return Err(ConsoleError::InvalidConfig(
                "wrap_width must be greater than 0".to_string(),
            ));
        }

        let mut warnings = Vec::new();
        if self.prompt_indent >= self.wrap_width {
            warnings.push(format!(
                "prompt_indent ({}) is not smaller than wrap_width ({}); prompt lines will hold one column",
                self.prompt_indent, self.wrap_width
            ));
        }
        Ok(warnings)
    }

    /// Get the default config directory (`~/.termkit`).
    pub fn default_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path (`~/.termkit/config.yaml`).
    pub fn default_path() -> Option<PathBuf> {
        Self::default_dir().map(|d| d.join("config.yaml"))
    }

    /// Directory that relative history keys are resolved against.
    pub fn history_dir(&self) -> Option<PathBuf> {
        self.history_dir
            .clone()
            .or_else(|| Self::default_dir().map(|d| d.join("history")))
    }

    /// Resolve a history key to a file path.
    ///
    /// Absolute keys are used as-is. Relative keys are joined to
    /// [`history_dir`](Self::history_dir), or used relative to the working
    /// directory when no home directory is known. Empty keys resolve to `None`.
    pub fn history_path(&self, key: &str) -> Option<PathBuf> {
        if key.is_empty() {
            return None;
        }
        let key_path = Path::new(key);
        if key_path.is_absolute() {
            return Some(key_path.to_path_buf());
        }
        match self.history_dir() {
            Some(dir) => Some(dir.join(key_path)),
            None => Some(key_path.to_path_buf()),
        }
    }
}
