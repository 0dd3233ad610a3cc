// Configuration for sequence counting
//
// Values come from three layers: built-in defaults, an optional TOML file,
// and explicit command line flags (highest precedence).

use crate::error::{Result, WordgramsError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of sequences to report
pub const DEFAULT_RESULT_LIMIT: usize = 100;

/// Default number of words per sequence
pub const DEFAULT_SEQUENCE_SIZE: usize = 3;

/// Configuration for a [`SequenceCounter`](crate::sequence::SequenceCounter)
///
/// # Example
/// ```
/// use wordgrams::config::CounterConfig;
///
/// let config = CounterConfig::default();
/// assert_eq!(config.result_limit, 100);
/// assert_eq!(config.sequence_size, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// How many of the most common sequences a report lists
    pub result_limit: usize,

    /// Number of consecutive words that make up one sequence
    ///
    /// 3 (trigrams) by default. A size of 1 degenerates to plain word
    /// frequency counting.
    pub sequence_size: usize,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            sequence_size: DEFAULT_SEQUENCE_SIZE,
        }
    }
}

impl CounterConfig {
    /// Load configuration from a TOML file
    ///
    /// Keys absent from the file keep their default values.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|source| WordgramsError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command line overrides on top of this configuration
    pub fn with_overrides(mut self, result_limit: Option<usize>, sequence_size: Option<usize>) -> Self {
        if let Some(limit) = result_limit {
            self.result_limit = limit;
        }
        if let Some(size) = sequence_size {
            self.sequence_size = size;
        }
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.result_limit == 0 {
            return Err(WordgramsError::InvalidConfiguration(format!(
                "result_limit must be >= 1, got {}",
                self.result_limit
            )));
        }

        if self.sequence_size == 0 {
            return Err(WordgramsError::InvalidConfiguration(format!(
                "sequence_size must be >= 1, got {}",
                self.sequence_size
            )));
        }

        Ok(())
    }
}
