//! Trial batch configuration.

use std::path::{Path, PathBuf};

use queens_config::QueensConfig;

/// Trials per batch when nothing else is configured.
pub const DEFAULT_TRIAL_COUNT: usize = 10;

/// Configuration for a batch of trials.
///
/// # Example
///
/// ```
/// use queens_benchmark::TrialConfig;
///
/// let config = TrialConfig::new("Min Conflicts")
///     .with_trial_count(100)
///     .with_csv_output("trials.csv");
///
/// assert_eq!(config.name(), "Min Conflicts");
/// assert_eq!(config.trial_count(), 100);
/// assert!(config.csv_output().is_some());
/// assert!(config.markdown_output().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct TrialConfig {
    name: String,
    trial_count: usize,
    csv_output: Option<PathBuf>,
    markdown_output: Option<PathBuf>,
}

impl TrialConfig {
    /// Creates a configuration running [`DEFAULT_TRIAL_COUNT`] trials.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            trial_count: DEFAULT_TRIAL_COUNT,
            csv_output: None,
            markdown_output: None,
        }
    }

    /// Takes the trial count and report paths from the `[trials]` section.
    ///
    /// ```
    /// use queens_benchmark::{TrialConfig, DEFAULT_TRIAL_COUNT};
    /// use queens_config::QueensConfig;
    ///
    /// let config = TrialConfig::from_config("HC", &QueensConfig::default());
    /// assert_eq!(config.trial_count(), DEFAULT_TRIAL_COUNT);
    ///
    /// let file = QueensConfig::from_toml_str("[trials]\ndefault_count = 3").unwrap();
    /// assert_eq!(TrialConfig::from_config("HC", &file).trial_count(), 3);
    /// ```
    pub fn from_config(name: impl Into<String>, config: &QueensConfig) -> Self {
        let trials = &config.trials;
        Self {
            name: name.into(),
            trial_count: trials.default_count.unwrap_or(DEFAULT_TRIAL_COUNT),
            csv_output: trials.csv_output.clone(),
            markdown_output: trials.markdown_output.clone(),
        }
    }

    pub fn with_trial_count(mut self, count: usize) -> Self {
        self.trial_count = count;
        self
    }

    /// Sets the path the CSV export is written to.
    pub fn with_csv_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_output = Some(path.into());
        self
    }

    /// Sets the path the Markdown report is written to.
    pub fn with_markdown_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.markdown_output = Some(path.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn trial_count(&self) -> usize {
        self.trial_count
    }

    pub fn csv_output(&self) -> Option<&Path> {
        self.csv_output.as_deref()
    }

    pub fn markdown_output(&self) -> Option<&Path> {
        self.markdown_output.as_deref()
    }
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self::new("Trials")
    }
}
