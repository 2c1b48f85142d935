//! Tag-overlap relevance judgments.
//!
//! Ground truth for the evaluation suite comes from the raw tag text of
//! two items, not from their vectors: a candidate is relevant to a query
//! when their tag sets overlap enough, and graded relevance is the
//! Jaccard index of the two sets.

use ahash::AHashSet;

/// Distinct lowercase whitespace-delimited tokens of a tag string.
#[must_use]
pub fn tag_set(tags: &str) -> AHashSet<String> {
    tags.split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

/// Judges query/candidate relevance from raw tag text.
#[derive(Debug, Clone, Copy)]
pub struct RelevanceJudge {
    /// Minimum number of shared tags for boolean relevance.
    pub min_common: usize,
}

impl Default for RelevanceJudge {
    fn default() -> Self {
        Self { min_common: 3 }
    }
}

impl RelevanceJudge {
    #[must_use]
    pub fn new(min_common: usize) -> Self {
        Self { min_common }
    }

    /// True iff the two tag sets share at least `min_common` tokens.
    #[must_use]
    pub fn is_relevant(&self, query_tags: &str, candidate_tags: &str) -> bool {
        let a = tag_set(query_tags);
        let b = tag_set(candidate_tags);
        a.intersection(&b).count() >= self.min_common
    }

    /// Jaccard index of the two tag sets, in [0, 1].
    ///
    /// Returns 0.0 whenever either set is empty - including when both
    /// are. Two tagless items are never judged similar; emptiness must
    /// not read as maximal relevance.
    #[must_use]
    pub fn graded(&self, query_tags: &str, candidate_tags: &str) -> f32 {
        let a = tag_set(query_tags);
        let b = tag_set(candidate_tags);
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        let intersection = a.intersection(&b).count();
        let union = a.union(&b).count();
        intersection as f32 / union as f32
    }
}
