use ahash::{AHashMap, AHashSet};

use crate::vector::TagVector;

/// Default cap on vocabulary size, matching the catalog scale this
/// engine is tuned for.
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// Default English stop words dropped during vocabulary construction.
///
/// The set is a configuration input; callers can pass any other set
/// (including an empty one) to [`Vectorizer::new`].
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "you", "your", "yours", "yourself",
    "yourselves",
];

/// The built-in English stop-word set.
#[must_use]
pub fn english_stop_words() -> AHashSet<String> {
    ENGLISH_STOP_WORDS.iter().map(|w| (*w).to_string()).collect()
}

/// A bounded token vocabulary mapping each retained token to a stable
/// column index.
///
/// Selection is deterministic: tokens are ranked by corpus-wide term
/// frequency descending, ties broken by ascending lexical order, and
/// column indices are assigned in that selection order. This policy is
/// what decides which tokens survive when the corpus has more distinct
/// tokens than `max_features`.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    index: AHashMap<String, usize>,
    tokens: Vec<String>,
}

impl Vocabulary {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Column index of a token, if retained.
    #[inline]
    #[must_use]
    pub fn column(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Retained tokens in column order.
    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Builds a [`Vocabulary`] from a corpus of normalized tag strings and
/// maps documents onto count vectors over it.
pub struct Vectorizer {
    max_features: usize,
    stop_words: AHashSet<String>,
}

impl Vectorizer {
    #[must_use]
    pub fn new(max_features: usize, stop_words: AHashSet<String>) -> Self {
        Self {
            max_features,
            stop_words,
        }
    }

    /// Build the vocabulary from a corpus of normalized documents.
    ///
    /// An empty corpus (or one where every token is a stop word) yields
    /// an empty vocabulary; `transform` then produces zero-length
    /// vectors.
    #[must_use]
    pub fn fit<S: AsRef<str>>(&self, corpus: &[S]) -> Vocabulary {
        let mut counts: AHashMap<String, u64> = AHashMap::new();
        for doc in corpus {
            for token in doc.as_ref().split_whitespace() {
                if self.stop_words.contains(token) {
                    continue;
                }
                *counts.entry(token.to_string()).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(String, u64)> = counts.into_iter().collect();
        // Frequency descending, then token ascending. The secondary key
        // makes truncation at max_features reproducible.
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(self.max_features);

        let tokens: Vec<String> = ranked.into_iter().map(|(token, _)| token).collect();
        let index = tokens
            .iter()
            .enumerate()
            .map(|(col, token)| (token.clone(), col))
            .collect();

        Vocabulary { index, tokens }
    }

    /// Count retained-token occurrences in one normalized document.
    ///
    /// Tokens outside the vocabulary are ignored, not an error.
    #[must_use]
    pub fn transform(&self, text: &str, vocabulary: &Vocabulary) -> TagVector {
        let mut counts = vec![0u32; vocabulary.len()];
        for token in text.split_whitespace() {
            if let Some(col) = vocabulary.column(token) {
                counts[col] += 1;
            }
        }
        TagVector::new(counts)
    }
}

impl Default for Vectorizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FEATURES, english_stop_words())
    }
}
