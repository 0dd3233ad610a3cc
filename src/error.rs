//! Error types for word sequence counting

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the counting core and its configuration layer
#[derive(Error, Debug)]
pub enum WordgramsError {
    /// A window capacity or result limit was not a positive integer
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to parse config file {}: {source}", .path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single input unit could not be read
///
/// The unit is skipped; the rest of the run continues.
#[derive(Error, Debug)]
#[error("{source_name}: {source}")]
pub struct ReadError {
    /// Human-readable name of the unit ("StdIn" or a file path)
    pub source_name: String,
    #[source]
    pub source: std::io::Error,
}

pub type Result<T> = std::result::Result<T, WordgramsError>;
