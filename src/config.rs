//! Application configuration loaded from `gridline.toml`.

use derive_getters::Getters;
use derive_more::{Display, Error};
use gridline_core::{DEFAULT_WIN_LENGTH, GlyphSet, Keymap};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "gridline.toml";

/// User-configurable settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Marks in a row needed to win.
    win_length: usize,
    /// Directory scanned for `.ttt` board files.
    boards_dir: PathBuf,
    /// Diagnostic log, appended to.
    log_file: PathBuf,
    /// Log filter used when `RUST_LOG` is unset.
    log_level: String,
    /// Character bindings.
    keys: Keymap,
    /// Display glyphs.
    glyphs: GlyphSet,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            win_length: DEFAULT_WIN_LENGTH,
            boards_dir: PathBuf::from("boards"),
            log_file: PathBuf::from("gridline.log"),
            log_level: "info".to_string(),
            keys: Keymap::default(),
            glyphs: GlyphSet::default(),
        }
    }
}

/// Command-line values taking precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_new::new)]
pub struct Overrides {
    /// Replaces `win_length`.
    pub win_length: Option<usize>,
    /// Replaces `boards_dir`.
    pub boards_dir: Option<PathBuf>,
    /// Replaces `log_file`.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid TOML,
    /// or holds invalid values.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed TOML or invalid values.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, else `gridline.toml` when present, else defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an explicitly named file is missing, or if
    /// the chosen file fails to load.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    info!("Config file not found at {}, using defaults", default.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Applies command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an override is invalid.
    #[instrument(skip(self))]
    pub fn apply(mut self, overrides: Overrides) -> Result<Self, ConfigError> {
        if let Some(win_length) = overrides.win_length {
            self.win_length = win_length;
        }
        if let Some(dir) = overrides.boards_dir {
            self.boards_dir = dir;
        }
        if let Some(log_file) = overrides.log_file {
            self.log_file = log_file;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.win_length == 0 {
            return Err(ConfigError::new("win_length must be at least 1".to_string()));
        }
        let k = &self.keys;
        let bound = [k.up, k.down, k.left, k.right, k.confirm, k.quit];
        for (i, key) in bound.iter().enumerate() {
            if bound[i + 1..].contains(key) {
                return Err(ConfigError::new(format!("Key {:?} is bound twice", key)));
            }
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
