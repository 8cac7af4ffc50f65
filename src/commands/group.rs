//! Group command handler: cluster topics and print the report.

use anyhow::Result;
use tracing::{info, warn};
use webinar_topics_core::report::order_groups;
use webinar_topics_core::{GroupingStats, OutputFormat, TopicGrouper, TopicInput, render};

use crate::cli::GroupArgs;

pub fn run_group_command(input: TopicInput, args: &GroupArgs) -> Result<()> {
    if input.skipped > 0 {
        info!(skipped = input.skipped, "Skipped blank and comment lines");
    }

    if input.is_empty() {
        warn!("No topics found in input");
        // JSON output is always a document, even when empty
        if args.format == OutputFormat::Json {
            println!("{}", render(&[], OutputFormat::Json)?);
        }
        return Ok(());
    }

    let grouper = TopicGrouper::with_threshold(args.threshold)?.ignore_case(args.ignore_case);
    let mut groups = grouper.group(input.topics);
    order_groups(&mut groups, args.sort);

    let stats = GroupingStats::from_groups(&groups);
    info!(
        topics = stats.topics(),
        groups = stats.groups(),
        merged = stats.merged(),
        "Grouping complete"
    );

    let rendered = render(&groups, args.format)?;
    match args.format {
        OutputFormat::Text => print!("{rendered}"),
        OutputFormat::Json => println!("{rendered}"),
    }

    Ok(())
}
