//! Assembly of topic input from positional arguments, a file, or stdin.

use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result};
use webinar_topics_core::{TopicInput, load_topics, parse_topics};

use crate::cli::GroupArgs;

/// Collects topics for a grouping run.
///
/// Positional topics are taken verbatim. Otherwise `--input` is read, then piped
/// stdin. Returns `None` when no source is available (interactive terminal, no args).
pub(crate) fn process_input(args: &GroupArgs) -> Result<Option<TopicInput>> {
    if !args.topics.is_empty() {
        return Ok(Some(TopicInput {
            topics: args.topics.clone(),
            skipped: 0,
        }));
    }

    if let Some(path) = &args.input {
        return Ok(Some(load_topics(path, args.input_format)?));
    }

    if io::stdin().is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read topics from stdin")?;
    Ok(Some(parse_topics(&buffer, args.input_format)?))
}
