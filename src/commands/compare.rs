//! Compare command handler: score a pair of topics.

use anyhow::Result;
use tracing::debug;
use webinar_topics_core::TopicGrouper;

use crate::cli::{CompareArgs, GroupArgs};

pub fn run_compare_command(compare: &CompareArgs, args: &GroupArgs) -> Result<()> {
    let grouper = TopicGrouper::with_threshold(args.threshold)?.ignore_case(args.ignore_case);
    let score = grouper.score(&compare.first, &compare.second);
    debug!(
        first = %compare.first,
        second = %compare.second,
        score,
        "Compared topics"
    );

    let verdict = if grouper.is_match(score) {
        "would group"
    } else {
        "would not group"
    };
    println!("similarity = {score:.4}");
    println!("threshold = {}", grouper.threshold());
    println!("result = {verdict}");

    Ok(())
}
