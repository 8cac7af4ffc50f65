//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use webinar_topics_core::{
    DEFAULT_SIMILARITY_THRESHOLD, GroupOrder, InputFormat, OutputFormat, TopicGrouper,
};

/// Group near-duplicate webinar topic requests for review.
///
/// Topics are clustered by bigram similarity so each cluster of
/// near-identical requests shows up once, under its first-submitted wording.
#[derive(Parser, Debug)]
#[command(name = "webinar-topics")]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub group: GroupArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score two topics and report whether they would be grouped
    Compare(CompareArgs),
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// First topic
    pub first: String,
    /// Second topic
    pub second: String,
}

#[derive(Args, Debug, Clone)]
pub struct GroupArgs {
    /// Topics to group (reads --input or stdin when omitted)
    pub topics: Vec<String>,

    /// Read topics from a file instead of stdin
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Format of file or stdin input
    #[arg(long, value_enum, default_value_t = InputFormat::Lines)]
    pub input_format: InputFormat,

    /// Report format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Group ordering in the report
    #[arg(short = 's', long, value_enum, default_value_t = GroupOrder::Input)]
    pub sort: GroupOrder,

    /// Similarity a topic must exceed to join a group (0-1, exclusive)
    #[arg(short = 't', long, global = true, default_value_t = DEFAULT_SIMILARITY_THRESHOLD, value_parser = parse_threshold)]
    pub threshold: f64,

    /// Compare topics case-insensitively
    #[arg(long, global = true)]
    pub ignore_case: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

fn parse_threshold(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    TopicGrouper::with_threshold(value).map_err(|err| err.to_string())?;
    Ok(value)
}
