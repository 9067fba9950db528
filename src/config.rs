//! Board shape and data service configuration.

use std::path::Path;
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Environment variable overriding [`TriviaConfig::base_url`].
pub const BASE_URL_ENV: &str = "TRIVIA_BASE_URL";

/// Shape of a dealt board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSettings {
    /// Columns on the board (N).
    #[serde(default = "default_categories")]
    pub categories: usize,

    /// Clues per column (K).
    #[serde(default = "default_clues_per_category")]
    pub clues_per_category: usize,

    /// How many category ids to request before sampling columns.
    #[serde(default = "default_id_pool_size")]
    pub id_pool_size: usize,
}

fn default_categories() -> usize {
    6
}

fn default_clues_per_category() -> usize {
    5
}

fn default_id_pool_size() -> usize {
    100
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            clues_per_category: default_clues_per_category(),
            id_pool_size: default_id_pool_size(),
        }
    }
}

impl BoardSettings {
    /// Checks that a board of this shape can be dealt at all.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any dimension is zero or the id pool is
    /// narrower than the board.
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories == 0 {
            return Err(ConfigError::new("Board needs at least one category"));
        }
        if self.clues_per_category == 0 {
            return Err(ConfigError::new("Categories need at least one clue"));
        }
        if self.id_pool_size < self.categories {
            return Err(ConfigError::new(format!(
                "Id pool of {} cannot fill {} categories",
                self.id_pool_size, self.categories
            )));
        }
        Ok(())
    }
}

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TriviaConfig {
    /// Root URL of the trivia data service.
    #[serde(default = "default_base_url")]
    base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    #[getter(copy)]
    request_timeout_secs: u64,

    /// Board shape.
    #[serde(default)]
    #[getter(copy)]
    board: BoardSettings,
}

fn default_base_url() -> String {
    "https://rithm-jeopardy.herokuapp.com/api".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            board: BoardSettings::default(),
        }
    }
}

impl TriviaConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Missing keys fall back to their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.board.validate()?;

        info!(base_url = %config.base_url, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the configuration the way the binary does: file if given,
    /// then the [`BASE_URL_ENV`] variable, then an explicit base URL.
    #[instrument]
    pub fn resolve(path: Option<&Path>, base_url: Option<String>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            debug!(url = %url, "Base URL from environment");
            config.base_url = url;
        }
        if let Some(url) = base_url {
            config.base_url = url;
        }
        config.board.validate()?;
        Ok(config)
    }

    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
