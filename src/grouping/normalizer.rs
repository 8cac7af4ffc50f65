//! Comparison-key normalization for case-insensitive grouping.

/// Normalizes a topic into its case-insensitive comparison key.
///
/// Normalization steps:
/// 1. Trim surrounding whitespace
/// 2. Collapse internal whitespace runs to a single space
/// 3. Convert to lowercase
///
/// Only the key is normalized; group members keep the submitted text.
#[must_use]
pub fn normalize_topic_key(topic: &str) -> String {
    topic
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
