// Tag text normalization: lowercase, whitespace split, pluggable stemming.

/// Per-token stemming hook injected into the [`Normalizer`].
///
/// Implementations must be pure so that vocabulary construction stays
/// reproducible across runs.
pub trait Stemmer: Send + Sync {
    fn stem(&self, token: &str) -> String;
}

/// Passes tokens through unchanged. The default when no stemming
/// algorithm is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    #[inline]
    fn stem(&self, token: &str) -> String {
        token.to_string()
    }
}

impl<F> Stemmer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    #[inline]
    fn stem(&self, token: &str) -> String {
        self(token)
    }
}

/// Maps raw tag text to a canonical token sequence.
///
/// Splits on whitespace, lowercases each token, applies the stemmer, and
/// rejoins with single spaces. Absent or empty input yields an empty
/// string, never an error.
pub struct Normalizer {
    stemmer: Box<dyn Stemmer>,
}

impl Normalizer {
    #[must_use]
    pub fn new(stemmer: Box<dyn Stemmer>) -> Self {
        Self { stemmer }
    }

    pub fn normalize(&self, text: Option<&str>) -> String {
        let Some(text) = text else {
            return String::new();
        };

        let tokens: Vec<String> = text
            .split_whitespace()
            .map(|token| self.stemmer.stem(&token.to_lowercase()))
            .filter(|token| !token.is_empty())
            .collect();

        tokens.join(" ")
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(Box::new(IdentityStemmer))
    }
}
