//! Webinar Topics Core Library
//!
//! This library groups free-text webinar topic requests submitted through an
//! alumni-engagement portal into clusters of near-duplicates, so a reviewer
//! sees one representative heading per cluster instead of N similar rows.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`similarity`] - Bigram (Sørensen–Dice) similarity scoring
//! - [`grouping`] - Greedy first-match clustering of topics
//! - [`input`] - Topic input parsing (plain lines or portal JSON)
//! - [`report`] - Text and JSON rendering of grouped topics

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod grouping;
pub mod input;
pub mod report;
pub mod similarity;

// Re-export commonly used types
pub use grouping::{
    DEFAULT_SIMILARITY_THRESHOLD, GroupingError, TopicGroup, TopicGrouper, TopicGroups,
    group_topics, normalize_topic_key,
};
pub use input::{InputError, InputFormat, TopicInput, load_topics, parse_topics};
pub use report::{GroupOrder, GroupSummary, GroupingStats, OutputFormat, render};
pub use similarity::dice_similarity;
