//! Error types for the interactive CEP prompt.

use std::io;

use thiserror::Error;

/// Errors that stop the prompt flow outright.
///
/// Invalid user input is not an error here: it is reported on the output
/// stream and surfaced as an [`super::Outcome`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Settings could not be loaded from flags or the environment.
    #[error("failed to load settings: {message}")]
    Config {
        /// Description of the configuration failure.
        message: String,
    },
    /// The requested number of codes is zero or above the limit.
    #[error("count must be between 1 and {max}, got {count}")]
    InvalidCount {
        /// Requested number of codes.
        count: usize,
        /// Largest accepted count.
        max: usize,
    },
    /// Reading input or writing output failed.
    #[error("terminal I/O failed: {message}")]
    Io {
        /// Description of the I/O error.
        message: String,
    },
    /// Generated codes could not be rendered as JSON.
    #[error("failed to serialize generated codes: {message}")]
    Serialize {
        /// Serializer error message.
        message: String,
    },
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize {
            message: err.to_string(),
        }
    }
}
