//! Fuzzy grouping of near-duplicate topic requests.
//!
//! Topics are clustered greedily in input order: each topic joins the first
//! existing group whose representative scores above the similarity threshold,
//! otherwise it starts a new group. The representative of a group is the first
//! topic that landed in it and never changes.

mod error;
mod normalizer;

pub use error::GroupingError;
pub use normalizer::normalize_topic_key;

use std::borrow::Cow;

use tracing::{debug, instrument, trace};

use crate::similarity::dice_similarity;

/// Similarity a candidate must exceed (strictly) to join a group.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;

/// A non-empty, ordered cluster of near-duplicate topics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicGroup {
    members: Vec<String>,
}

impl TopicGroup {
    /// Creates a group anchored on its representative topic.
    #[must_use]
    pub fn new(representative: impl Into<String>) -> Self {
        Self {
            members: vec![representative.into()],
        }
    }

    /// The first topic added to the group.
    #[must_use]
    pub fn representative(&self) -> &str {
        // members is never empty: the only constructor seeds it
        &self.members[0]
    }

    /// All topics in insertion order, representative first.
    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Number of topics in the group (always at least 1).
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Consumes the group, returning its members.
    #[must_use]
    pub fn into_members(self) -> Vec<String> {
        self.members
    }

    fn push(&mut self, topic: String) {
        self.members.push(topic);
    }
}

/// Grouping settings.
///
/// [`TopicGrouper::new`] gives the reference behavior: threshold 0.6 and exact
/// (case-sensitive) comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopicGrouper {
    threshold: f64,
    ignore_case: bool,
}

impl Default for TopicGrouper {
    fn default() -> Self {
        Self::new()
    }
}

impl TopicGrouper {
    /// Creates a grouper with the default threshold and exact comparison.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
            ignore_case: false,
        }
    }

    /// Creates a grouper with a custom threshold.
    ///
    /// # Errors
    /// Returns [`GroupingError::InvalidThreshold`] unless `threshold` is a
    /// finite number strictly between 0 and 1.
    pub fn with_threshold(threshold: f64) -> Result<Self, GroupingError> {
        if !threshold.is_finite() {
            return Err(GroupingError::invalid_threshold(
                threshold,
                "must be a finite number",
            ));
        }
        if threshold <= 0.0 {
            return Err(GroupingError::invalid_threshold(
                threshold,
                "must be greater than 0",
            ));
        }
        if threshold >= 1.0 {
            return Err(GroupingError::invalid_threshold(
                threshold,
                "must be less than 1",
            ));
        }
        Ok(Self {
            threshold,
            ignore_case: false,
        })
    }

    /// Compares normalized keys instead of raw text when enabled.
    #[must_use]
    pub const fn ignore_case(mut self, enabled: bool) -> Self {
        self.ignore_case = enabled;
        self
    }

    /// The effective similarity threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether comparisons use case-insensitive keys.
    #[must_use]
    pub const fn is_case_insensitive(&self) -> bool {
        self.ignore_case
    }

    /// Returns the string actually compared for `topic`.
    #[must_use]
    pub fn comparison_key<'a>(&self, topic: &'a str) -> Cow<'a, str> {
        if self.ignore_case {
            Cow::Owned(normalize_topic_key(topic))
        } else {
            Cow::Borrowed(topic)
        }
    }

    /// Scores two topics under this grouper's key rules.
    #[must_use]
    pub fn score(&self, a: &str, b: &str) -> f64 {
        dice_similarity(&self.comparison_key(a), &self.comparison_key(b))
    }

    /// Whether a score is high enough to merge.
    #[must_use]
    pub fn is_match(&self, score: f64) -> bool {
        score > self.threshold
    }

    /// Starts an empty incremental grouping.
    #[must_use]
    pub fn start(&self) -> TopicGroups {
        TopicGroups {
            grouper: *self,
            groups: Vec::new(),
            keys: Vec::new(),
        }
    }

    /// Groups all topics in input order.
    #[instrument(skip_all, fields(threshold = self.threshold, ignore_case = self.ignore_case))]
    pub fn group<I, S>(&self, topics: I) -> Vec<TopicGroup>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut groups = self.start();
        let mut total = 0usize;
        for topic in topics {
            groups.insert(topic);
            total += 1;
        }
        debug!(topics = total, groups = groups.len(), "Grouped topics");
        groups.into_groups()
    }
}

/// Incremental grouping state: ordered groups plus each representative's key.
#[derive(Debug, Clone)]
pub struct TopicGroups {
    grouper: TopicGrouper,
    groups: Vec<TopicGroup>,
    keys: Vec<String>,
}

impl TopicGroups {
    /// Adds a topic and returns the index of the group it joined or created.
    ///
    /// Groups are scanned in creation order and the first one scoring above
    /// the threshold wins, even if a later group would score higher.
    pub fn insert(&mut self, topic: impl Into<String>) -> usize {
        let topic = topic.into();
        let key = self.grouper.comparison_key(&topic).into_owned();

        for (index, representative_key) in self.keys.iter().enumerate() {
            let score = dice_similarity(&key, representative_key);
            if self.grouper.is_match(score) {
                trace!(topic = %topic, group = index, score, "Topic joined group");
                self.groups[index].push(topic);
                return index;
            }
        }

        let index = self.groups.len();
        trace!(topic = %topic, group = index, "Topic started group");
        self.groups.push(TopicGroup::new(topic));
        self.keys.push(key);
        index
    }

    /// Groups formed so far, in creation order.
    #[must_use]
    pub fn groups(&self) -> &[TopicGroup] {
        &self.groups
    }

    /// Number of groups formed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if no topic has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Consumes the state, returning the groups in creation order.
    #[must_use]
    pub fn into_groups(self) -> Vec<TopicGroup> {
        self.groups
    }
}

/// Groups topics with the default threshold and exact comparison.
#[must_use]
pub fn group_topics<I, S>(topics: I) -> Vec<TopicGroup>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    TopicGrouper::new().group(topics)
}
