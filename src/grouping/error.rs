//! Error types for grouping configuration.

use thiserror::Error;

/// Errors raised when configuring a [`TopicGrouper`](super::TopicGrouper).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GroupingError {
    /// Threshold outside the open interval `(0, 1)`
    #[error(
        "invalid similarity threshold {value}: {reason}\n  Suggestion: Use a value strictly between 0 and 1, e.g. 0.6"
    )]
    InvalidThreshold {
        /// The rejected value
        value: f64,
        /// Why it was rejected
        reason: &'static str,
    },
}

impl GroupingError {
    /// Creates an `InvalidThreshold` error.
    #[must_use]
    pub fn invalid_threshold(value: f64, reason: &'static str) -> Self {
        Self::InvalidThreshold { value, reason }
    }
}
