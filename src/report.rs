//! Rendering grouped topics for review.

use clap::ValueEnum;
use serde::Serialize;

use crate::grouping::TopicGroup;

/// How groups are ordered in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GroupOrder {
    /// Creation order (first-seen representative first)
    #[default]
    Input,
    /// Largest groups first; ties keep creation order
    Size,
}

impl GroupOrder {
    /// Returns the stable string label for display output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Size => "size",
        }
    }
}

/// Report output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Numbered headings with indented members
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

impl OutputFormat {
    /// Returns the stable string label for display output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

/// Serializable view of one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary<'a> {
    /// First topic of the group.
    pub representative: &'a str,
    /// Number of members, representative included.
    pub count: usize,
    /// Members in input order.
    pub members: &'a [String],
}

impl<'a> From<&'a TopicGroup> for GroupSummary<'a> {
    fn from(group: &'a TopicGroup) -> Self {
        Self {
            representative: group.representative(),
            count: group.len(),
            members: group.members(),
        }
    }
}

/// Aggregate counts for a grouping run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupingStats {
    topics: usize,
    groups: usize,
}

impl GroupingStats {
    /// Computes counts from the grouped output.
    #[must_use]
    pub fn from_groups(groups: &[TopicGroup]) -> Self {
        Self {
            topics: groups.iter().map(TopicGroup::len).sum(),
            groups: groups.len(),
        }
    }

    /// Total topics across all groups.
    #[must_use]
    pub fn topics(&self) -> usize {
        self.topics
    }

    /// Number of groups.
    #[must_use]
    pub fn groups(&self) -> usize {
        self.groups
    }

    /// Topics folded into an existing group rather than starting one.
    #[must_use]
    pub fn merged(&self) -> usize {
        self.topics - self.groups
    }
}

/// Reorders groups in place.
pub fn order_groups(groups: &mut [TopicGroup], order: GroupOrder) {
    match order {
        GroupOrder::Input => {}
        // sort_by is stable
        GroupOrder::Size => groups.sort_by(|left, right| right.len().cmp(&left.len())),
    }
}

/// Renders groups as numbered headings with indented members.
#[must_use]
pub fn render_text(groups: &[TopicGroup]) -> String {
    let mut out = String::new();
    for (index, group) in groups.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} ({})\n",
            index + 1,
            group.representative(),
            group.len()
        ));
        for member in group.members() {
            out.push_str(&format!("   - {member}\n"));
        }
    }
    out
}

/// Renders groups as a pretty-printed JSON array of [`GroupSummary`].
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_json(groups: &[TopicGroup]) -> Result<String, serde_json::Error> {
    let summaries: Vec<GroupSummary<'_>> = groups.iter().map(GroupSummary::from).collect();
    serde_json::to_string_pretty(&summaries)
}

/// Renders groups in the requested format.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render(groups: &[TopicGroup], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(groups)),
        OutputFormat::Json => render_json(groups),
    }
}
