//! # mindrec Core
//!
//! Core library for the mindrec content-based recommendation engine.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`Catalog`] - Ordered, immutable snapshot of items (title + raw tags)
//! - [`Normalizer`] - Tag text normalization with a pluggable [`Stemmer`]
//! - [`Vectorizer`] - Bounded-vocabulary construction and count vectorization
//! - [`SimilarityMatrix`] - Dense symmetric pairwise cosine similarity
//! - [`RankingSession`] - Build-once model answering top-K queries
//!
//! ## Example
//!
//! ```rust
//! use mindrec_core::{Catalog, Normalizer, RankingSession, SessionConfig};
//!
//! let catalog = Catalog::from_records([
//!     ("Alien Dawn", "space horror alien crew ship"),
//!     ("Void Station", "space station alien crew"),
//!     ("Meadow Song", "romance countryside music"),
//! ]);
//!
//! let session = RankingSession::build(
//!     catalog,
//!     &Normalizer::default(),
//!     &SessionConfig::default(),
//! )
//! .unwrap();
//!
//! let titles = session.recommend("Alien Dawn", 1).unwrap();
//! assert_eq!(titles, vec!["Void Station".to_string()]);
//! ```

pub mod catalog;
pub mod error;
pub mod matrix;
pub mod normalize;
pub mod rank;
pub mod session;
pub mod vector;
pub mod vocab;

pub use catalog::{Catalog, Item};
pub use error::{Error, Result};
pub use matrix::SimilarityMatrix;
pub use normalize::{IdentityStemmer, Normalizer, Stemmer};
pub use rank::top_k;
pub use session::{RankingSession, SessionConfig};
pub use vector::TagVector;
pub use vocab::{english_stop_words, Vectorizer, Vocabulary, DEFAULT_MAX_FEATURES};
