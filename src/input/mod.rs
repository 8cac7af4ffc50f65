//! Topic request input parsing.
//!
//! Topics arrive either as plain text (one per line) or as the JSON the
//! portal backend returns for topic requests. JSON documents may be:
//! - an array of strings
//! - an array of request objects carrying a `topic` (or `title`) field
//! - an object wrapping either array under `topics`
//!
//! Extra request fields (requester email, status tags) are ignored.

mod error;

pub use error::InputError;

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;
use tracing::{debug, instrument};

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputFormat {
    /// One topic per line; blank lines and `#` comments are skipped
    #[default]
    Lines,
    /// JSON topic requests
    Json,
}

impl InputFormat {
    /// Returns the stable string label for display output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lines => "lines",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Topics extracted from input, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicInput {
    /// Topic strings in input order
    pub topics: Vec<String>,
    /// Lines skipped as blank or comments (line format only)
    pub skipped: usize,
}

impl TopicInput {
    /// Returns true if no topics were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Returns count of topics found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TopicEntry {
    Text(String),
    Request {
        #[serde(alias = "title")]
        topic: String,
    },
}

impl TopicEntry {
    fn into_topic(self) -> String {
        match self {
            Self::Text(topic) | Self::Request { topic } => topic,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TopicDocument {
    List(Vec<TopicEntry>),
    Wrapped { topics: Vec<TopicEntry> },
}

/// Parses topics from text in the given format.
///
/// # Errors
/// Returns [`InputError::InvalidJson`] if JSON input is malformed or has an
/// unsupported shape. Line input never fails.
#[instrument(skip(text), fields(bytes = text.len()))]
pub fn parse_topics(text: &str, format: InputFormat) -> Result<TopicInput, InputError> {
    let input = match format {
        InputFormat::Lines => parse_lines(text),
        InputFormat::Json => parse_json(text)?,
    };
    debug!(
        topics = input.len(),
        skipped = input.skipped,
        "Parsed topic input"
    );
    Ok(input)
}

/// Reads and parses a topics file.
///
/// # Errors
/// Returns [`InputError::Io`] if the file cannot be read, or any error from
/// [`parse_topics`].
#[instrument]
pub fn load_topics(path: &Path, format: InputFormat) -> Result<TopicInput, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::io(path, source))?;
    parse_topics(&content, format)
}

fn parse_lines(text: &str) -> TopicInput {
    let mut input = TopicInput::default();
    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            input.skipped += 1;
        } else {
            input.topics.push(line.to_string());
        }
    }
    input
}

fn parse_json(text: &str) -> Result<TopicInput, InputError> {
    let document: TopicDocument =
        serde_json::from_str(text).map_err(|error| InputError::invalid_json(&error))?;
    let entries = match document {
        TopicDocument::List(entries) | TopicDocument::Wrapped { topics: entries } => entries,
    };
    Ok(TopicInput {
        topics: entries.into_iter().map(TopicEntry::into_topic).collect(),
        skipped: 0,
    })
}
