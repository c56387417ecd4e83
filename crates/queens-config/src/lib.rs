//! Configuration system for N-Queens local search.
//!
//! Load board, search and trial settings from TOML or YAML so experiments
//! can be repeated without code changes.
//!
//! # Examples
//!
//! ```
//! use queens_config::QueensConfig;
//!
//! let config = QueensConfig::from_toml_str(r#"
//!     board_size = 8
//!     random_seed = 42
//!
//!     [min_conflicts]
//!     max_steps = 2000
//!
//!     [trials]
//!     csv_output = "trials.csv"
//! "#).unwrap();
//!
//! assert_eq!(config.board_size, 8);
//! assert_eq!(config.min_conflicts.max_steps, 2000);
//! assert!(config.validate().is_ok());
//! ```
//!
//! Use defaults when the file is missing:
//!
//! ```
//! use queens_config::QueensConfig;
//!
//! let config = QueensConfig::load("queens.toml").unwrap_or_default();
//! assert_eq!(config.board_size, 21);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Board size used when none is configured.
pub const DEFAULT_BOARD_SIZE: usize = 21;

/// Min-conflicts iteration bound used when none is configured.
pub const DEFAULT_MAX_STEPS: u64 = 1000;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct QueensConfig {
    /// Number of queens, columns and rows.
    pub board_size: usize,

    /// Seed for reproducible runs. `None` seeds from the operating system.
    pub random_seed: Option<u64>,

    /// Min-conflicts settings.
    pub min_conflicts: MinConflictsConfig,

    /// Random restart settings.
    pub restart: RestartConfig,

    /// Batch trial settings.
    pub trials: TrialsConfig,
}

impl Default for QueensConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            random_seed: None,
            min_conflicts: MinConflictsConfig::default(),
            restart: RestartConfig::default(),
            trials: TrialsConfig::default(),
        }
    }
}

impl QueensConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file.
    ///
    /// Files ending in `.yaml` or `.yml` are read as YAML, everything else as
    /// TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the board size.
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the min-conflicts iteration bound.
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.min_conflicts.max_steps = max_steps;
        self
    }

    /// Sets the random restart bound.
    pub fn with_max_restarts(mut self, max_restarts: u64) -> Self {
        self.restart.max_restarts = Some(max_restarts);
        self
    }

    /// Checks values that parse fine but cannot drive a search.
    ///
    /// # Examples
    ///
    /// ```
    /// use queens_config::QueensConfig;
    ///
    /// assert!(QueensConfig::new().with_board_size(0).validate().is_err());
    /// assert!(QueensConfig::new().with_board_size(8).validate().is_ok());
    /// assert!(QueensConfig::new().with_board_size(3).validate().is_err());
    /// assert!(QueensConfig::new().with_board_size(3).with_max_restarts(5).validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::Invalid(
                "board_size must be at least 1".to_string(),
            ));
        }
        if self.min_conflicts.max_steps == 0 {
            return Err(ConfigError::Invalid(
                "min_conflicts.max_steps must be at least 1".to_string(),
            ));
        }
        if self.restart.max_restarts == Some(0) {
            return Err(ConfigError::Invalid(
                "restart.max_restarts must be at least 1 when set".to_string(),
            ));
        }
        // Sizes 2 and 3 have no solution, so restarting until solved never ends.
        if matches!(self.board_size, 2 | 3) && self.restart.max_restarts.is_none() {
            return Err(ConfigError::Invalid(format!(
                "board_size {} has no solution; set restart.max_restarts",
                self.board_size
            )));
        }
        Ok(())
    }
}

/// Min-conflicts configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct MinConflictsConfig {
    /// Maximum number of reassignments before giving up.
    pub max_steps: u64,
}

impl Default for MinConflictsConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

/// Random restart configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RestartConfig {
    /// Maximum number of attempts. `None` restarts until solved.
    pub max_restarts: Option<u64>,
}

/// Batch trial configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TrialsConfig {
    /// Trial count used when none is entered interactively.
    pub default_count: Option<usize>,

    /// Path for the per-trial CSV export.
    pub csv_output: Option<PathBuf>,

    /// Path for the Markdown summary.
    pub markdown_output: Option<PathBuf>,
}
