use serde::{Deserialize, Serialize};

/// A non-negative token count vector over a fixed vocabulary.
///
/// Entry `c` counts how many times vocabulary column `c`'s token occurs
/// in one item's normalized tags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagVector {
    counts: Vec<u32>,
}

impl TagVector {
    #[inline]
    #[must_use]
    pub fn new(counts: Vec<u32>) -> Self {
        Self { counts }
    }

    #[inline]
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            counts: vec![0; dim],
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// True when every entry is zero (items whose tags all fell outside
    /// the vocabulary).
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Exact integer dot product.
    #[inline]
    #[must_use]
    pub fn dot(&self, other: &TagVector) -> u64 {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .map(|(&a, &b)| u64::from(a) * u64::from(b))
            .sum()
    }

    /// Euclidean norm.
    #[inline]
    #[must_use]
    pub fn norm(&self) -> f32 {
        let sum_sq: u64 = self.counts.iter().map(|&c| u64::from(c) * u64::from(c)).sum();
        (sum_sq as f32).sqrt()
    }

    /// Cosine similarity in [0, 1].
    ///
    /// Returns 0.0 when either norm is zero or the dimensions differ.
    #[inline]
    #[must_use]
    pub fn cosine_similarity(&self, other: &TagVector) -> f32 {
        if self.dim() != other.dim() {
            return 0.0;
        }

        let norm_a = self.norm();
        let norm_b = other.norm();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        self.dot(other) as f32 / (norm_a * norm_b)
    }
}
