//! Error types for topic input loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or parsing topic input.
#[derive(Debug, Error)]
pub enum InputError {
    /// Input file could not be read
    #[error("cannot read topics file '{}': {source}\n  Suggestion: Check the path and file permissions", path.display())]
    Io {
        /// The file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON input does not have a supported shape
    #[error("invalid JSON topic input: {reason}\n  Suggestion: {suggestion}")]
    InvalidJson {
        /// Why parsing failed
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },
}

impl InputError {
    /// Creates an `Io` error for a file path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an `InvalidJson` error from a serde failure.
    #[must_use]
    pub fn invalid_json(error: &serde_json::Error) -> Self {
        let suggestion = if error.is_syntax() || error.is_eof() {
            "Check the JSON syntax, or use --input-format lines for plain text"
        } else {
            "Provide an array of strings, an array of objects with a \"topic\" field, or {\"topics\": [...]}"
        };
        Self::InvalidJson {
            reason: error.to_string(),
            suggestion: suggestion.to_string(),
        }
    }
}
