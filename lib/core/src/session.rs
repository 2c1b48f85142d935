use ahash::AHashSet;

use crate::catalog::Catalog;
use crate::matrix::SimilarityMatrix;
use crate::normalize::Normalizer;
use crate::rank;
use crate::vocab::{english_stop_words, Vectorizer, Vocabulary, DEFAULT_MAX_FEATURES};
use crate::Result;

/// Configuration for building a [`RankingSession`].
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Upper bound on vocabulary size.
    pub max_features: usize,
    /// Tokens excluded from the vocabulary.
    pub stop_words: AHashSet<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
            stop_words: english_stop_words(),
        }
    }
}

/// An immutable ranking model built once from a catalog snapshot.
///
/// Owns the catalog, the vocabulary fitted on it, and the pairwise
/// similarity matrix. Nothing here mutates after construction, so a
/// session can be shared read-only across threads; a changed catalog
/// requires building a new session.
pub struct RankingSession {
    catalog: Catalog,
    vocabulary: Vocabulary,
    matrix: SimilarityMatrix,
}

impl RankingSession {
    /// Normalize every item's tags, fit the vocabulary, vectorize, and
    /// compute the pairwise similarity matrix.
    pub fn build(
        catalog: Catalog,
        normalizer: &Normalizer,
        config: &SessionConfig,
    ) -> Result<Self> {
        let corpus: Vec<String> = catalog
            .iter()
            .map(|item| normalizer.normalize(Some(&item.tags)))
            .collect();

        let vectorizer = Vectorizer::new(config.max_features, config.stop_words.clone());
        let vocabulary = vectorizer.fit(&corpus);

        let vectors: Vec<_> = corpus
            .iter()
            .map(|doc| vectorizer.transform(doc, &vocabulary))
            .collect();
        let matrix = SimilarityMatrix::build(&vectors)?;

        Ok(Self {
            catalog,
            vocabulary,
            matrix,
        })
    }

    /// Titles of the `k` items most similar to the item with `title`.
    ///
    /// Fails with [`crate::Error::TitleNotFound`] when the title is not
    /// in the catalog.
    pub fn recommend(&self, title: &str, k: usize) -> Result<Vec<String>> {
        let query = self.catalog.find_by_title(title)?.index;
        let ranked = self.recommend_by_index(query, k)?;
        Ok(ranked
            .into_iter()
            .filter_map(|index| self.catalog.get(index).map(|item| item.title.clone()))
            .collect())
    }

    /// Indices of the `k` items most similar to the item at `index`.
    pub fn recommend_by_index(&self, index: usize, k: usize) -> Result<Vec<usize>> {
        rank::top_k(&self.matrix, index, k)
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[inline]
    #[must_use]
    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn sample_session() -> RankingSession {
        let catalog = Catalog::from_records([
            ("Space Heist", "space heist crew robbery stars"),
            ("Star Robbery", "space robbery stars crime"),
            ("Quiet Garden", "garden flowers quiet spring"),
            ("Untagged", ""),
        ]);
        let config = SessionConfig {
            max_features: 100,
            stop_words: AHashSet::new(),
        };
        RankingSession::build(catalog, &Normalizer::default(), &config).unwrap()
    }

    #[test]
    fn test_recommend_prefers_overlapping_tags() {
        let session = sample_session();
        let titles = session.recommend("Space Heist", 2).unwrap();
        assert_eq!(titles[0], "Star Robbery");
    }

    #[test]
    fn test_recommend_unknown_title() {
        let session = sample_session();
        let err = session.recommend("Nope", 3).unwrap_err();
        assert!(matches!(err, Error::TitleNotFound(_)));
    }

    #[test]
    fn test_recommend_never_returns_query() {
        let session = sample_session();
        for index in 0..session.catalog().len() {
            let ranked = session.recommend_by_index(index, 10).unwrap();
            assert!(!ranked.contains(&index));
            assert_eq!(ranked.len(), session.catalog().len() - 1);
        }
    }

    #[test]
    fn test_untagged_item_has_zero_similarity_everywhere() {
        let session = sample_session();
        let untagged = session.catalog().find_by_title("Untagged").unwrap().index;
        let row = session.similarity().row(untagged).unwrap();
        assert!(row.iter().all(|&sim| sim == 0.0));
    }

    #[test]
    fn test_sessions_are_independent() {
        // Two sessions over different catalogs must not share state.
        let a = sample_session();
        let catalog = Catalog::from_records([("Solo", "one lonely tag")]);
        let b = RankingSession::build(
            catalog,
            &Normalizer::default(),
            &SessionConfig::default(),
        )
        .unwrap();

        assert_eq!(a.catalog().len(), 4);
        assert_eq!(b.catalog().len(), 1);
        assert!(b.recommend("Solo", 5).unwrap().is_empty());
    }
}
