//! Batch evaluation over a ranking session.
//!
//! Runs every catalog item as a query, judges relevance from raw tag
//! text, and aggregates rank-quality, coverage, and diversity metrics
//! into one report.

use ahash::AHashSet;
use mindrec_core::RankingSession;
use serde::{Deserialize, Serialize};

use crate::diversity::{average_diversity, EvalError};
use crate::metrics::{catalog_coverage, mrr, ndcg_at_k, precision_at_k, recall_at_k};
use crate::relevance::RelevanceJudge;

/// Parameters for an evaluation run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Recommendation list length per query.
    pub k: usize,
    /// Minimum shared tags for boolean relevance.
    pub min_common: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self { k: 5, min_common: 3 }
    }
}

/// Metrics for a single query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QueryMetrics {
    pub query: usize,
    pub precision: f32,
    pub recall: f32,
    pub mrr: f32,
    pub ndcg: f32,
}

/// Aggregated evaluation results over the whole catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalReport {
    pub queries: usize,
    pub k: usize,
    pub mean_precision: f32,
    pub mean_recall: f32,
    pub mean_mrr: f32,
    pub mean_ndcg: f32,
    pub coverage: f32,
    pub diversity: f32,
}

/// Drives the metric suite over every item of a session's catalog.
pub struct Evaluator {
    config: EvalConfig,
    judge: RelevanceJudge,
}

impl Evaluator {
    #[must_use]
    pub fn new(config: EvalConfig) -> Self {
        Self {
            judge: RelevanceJudge::new(config.min_common),
            config,
        }
    }

    /// Metrics for one query item.
    pub fn evaluate_query(
        &self,
        session: &RankingSession,
        query: usize,
    ) -> Result<QueryMetrics, EvalError> {
        let recommended = session.recommend_by_index(query, self.config.k)?;
        Ok(self.metrics_for(session, query, &recommended))
    }

    fn metrics_for(
        &self,
        session: &RankingSession,
        query: usize,
        recommended: &[usize],
    ) -> QueryMetrics {
        let catalog = session.catalog();
        let query_tags = catalog
            .get(query)
            .map(|item| item.tags.as_str())
            .unwrap_or_default();

        let relevant: AHashSet<usize> = catalog
            .iter()
            .filter(|item| {
                item.index != query && self.judge.is_relevant(query_tags, &item.tags)
            })
            .map(|item| item.index)
            .collect();

        let grade = |index: usize| {
            catalog
                .get(index)
                .map(|item| self.judge.graded(query_tags, &item.tags))
                .unwrap_or(0.0)
        };

        QueryMetrics {
            query,
            precision: precision_at_k(recommended, &relevant, self.config.k),
            recall: recall_at_k(recommended, &relevant, self.config.k),
            mrr: mrr(recommended, &relevant),
            ndcg: ndcg_at_k(recommended, grade, catalog.len(), self.config.k),
        }
    }

    /// Evaluate every catalog item as a query and aggregate.
    pub fn run(&self, session: &RankingSession) -> Result<EvalReport, EvalError> {
        let n = session.catalog().len();
        let mut per_query = Vec::with_capacity(n);
        let mut all_lists = Vec::with_capacity(n);

        for query in 0..n {
            let recommended = session.recommend_by_index(query, self.config.k)?;
            per_query.push(self.metrics_for(session, query, &recommended));
            all_lists.push(recommended);
        }

        let diversity = average_diversity(session.similarity(), &all_lists)?;
        let coverage = catalog_coverage(&all_lists, n);

        let mean = |f: fn(&QueryMetrics) -> f32| {
            if per_query.is_empty() {
                0.0
            } else {
                per_query.iter().map(f).sum::<f32>() / per_query.len() as f32
            }
        };

        Ok(EvalReport {
            queries: n,
            k: self.config.k,
            mean_precision: mean(|q| q.precision),
            mean_recall: mean(|q| q.recall),
            mean_mrr: mean(|q| q.mrr),
            mean_ndcg: mean(|q| q.ndcg),
            coverage,
            diversity,
        })
    }
}
