//! # mindrec Eval
//!
//! Evaluation suite for the mindrec recommendation core.
//!
//! Judges ranking quality against a tag-overlap notion of relevance,
//! using standard information-retrieval metrics plus coverage and
//! diversity measures.
//!
//! ## Features
//!
//! - **Relevance judgments**: boolean (shared-tag threshold) and graded
//!   (Jaccard of tag sets) relevance from raw tag text
//! - **Rank quality**: Precision@K, Recall@K, MRR, NDCG@K
//! - **Set quality**: catalog coverage and intra-list diversity
//! - **Batch evaluation**: every catalog item as a query, aggregated
//!   into one [`EvalReport`]
//!
//! ## Example
//!
//! ```rust
//! use mindrec_core::{Catalog, Normalizer, RankingSession, SessionConfig};
//! use mindrec_eval::{EvalConfig, Evaluator};
//!
//! let catalog = Catalog::from_records([
//!     ("Alien Dawn", "space horror alien crew ship"),
//!     ("Void Station", "space station alien crew"),
//!     ("Meadow Song", "romance countryside music"),
//! ]);
//! let session = RankingSession::build(
//!     catalog,
//!     &Normalizer::default(),
//!     &SessionConfig::default(),
//! )
//! .unwrap();
//!
//! let evaluator = Evaluator::new(EvalConfig { k: 2, min_common: 3 });
//! let report = evaluator.run(&session).unwrap();
//! assert_eq!(report.queries, 3);
//! ```

pub mod diversity;
pub mod metrics;
pub mod relevance;
pub mod report;

// Re-export main types for convenience
pub use diversity::{average_diversity, intra_list_diversity, EvalError};
pub use metrics::{
    catalog_coverage, dcg_at_k, mrr, ndcg_at_k, precision_at_k, recall_at_k,
};
pub use relevance::{tag_set, RelevanceJudge};
pub use report::{EvalConfig, EvalReport, Evaluator, QueryMetrics};
