//! # mindrec
//!
//! A content-based movie recommendation core.
//!
//! mindrec turns free-text tag descriptions of catalog items into
//! bounded-vocabulary count vectors, derives a dense pairwise cosine
//! similarity matrix, and ranks the most similar items for any query.
//! A companion evaluation suite judges ranking quality against a
//! tag-overlap notion of relevance (Precision@K, Recall@K, MRR, NDCG@K)
//! plus coverage and diversity measures.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install mindrec
//! mindrec recommend --catalog movies.csv --title "Inception" --top-k 5
//! mindrec evaluate --catalog movies.csv --k 5 --min-common 3
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use mindrec::prelude::*;
//!
//! // A catalog snapshot: (title, raw tag text) records in index order.
//! let catalog = Catalog::from_records([
//!     ("Alien Dawn", "space horror alien crew ship"),
//!     ("Void Station", "space station alien crew"),
//!     ("Meadow Song", "romance countryside music"),
//! ]);
//!
//! // Build the session once; it is immutable afterwards.
//! let session = RankingSession::build(
//!     catalog,
//!     &Normalizer::default(),
//!     &SessionConfig::default(),
//! )
//! .unwrap();
//!
//! let titles = session.recommend("Alien Dawn", 2).unwrap();
//! assert_eq!(titles[0], "Void Station");
//!
//! // Evaluate ranking quality over the whole catalog.
//! let report = Evaluator::new(EvalConfig { k: 2, min_common: 3 })
//!     .run(&session)
//!     .unwrap();
//! assert_eq!(report.queries, 3);
//! ```
//!
//! ## Crate Structure
//!
//! mindrec is composed of two library crates plus this facade:
//!
//! - [`mindrec-core`](https://docs.rs/mindrec-core) - Catalog, normalization,
//!   vocabulary vectors, similarity matrix, top-K ranking
//! - [`mindrec-eval`](https://docs.rs/mindrec-eval) - Relevance judgments,
//!   IR metrics, coverage/diversity, batch evaluation

// Re-export core types
pub use mindrec_core::{
    english_stop_words, top_k, Catalog, Error, IdentityStemmer, Item, Normalizer,
    RankingSession, Result, SessionConfig, SimilarityMatrix, Stemmer, TagVector, Vectorizer,
    Vocabulary, DEFAULT_MAX_FEATURES,
};

// Re-export evaluation types
pub use mindrec_eval::{
    average_diversity, catalog_coverage, dcg_at_k, intra_list_diversity, mrr, ndcg_at_k,
    precision_at_k, recall_at_k, tag_set, EvalConfig, EvalError, EvalReport, Evaluator,
    QueryMetrics, RelevanceJudge,
};

pub mod loader;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::loader::load_catalog;
    pub use crate::{
        Catalog, Error, EvalConfig, EvalError, EvalReport, Evaluator, Item, Normalizer,
        RankingSession, RelevanceJudge, Result, SessionConfig, SimilarityMatrix, Stemmer,
        TagVector,
    };
}
