use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::vector::TagVector;
use crate::{Error, Result};

/// Dense symmetric pairwise cosine-similarity matrix over a catalog's
/// item vectors.
///
/// Built once from a static snapshot; immutable afterwards, so it can be
/// shared read-only across any number of concurrent ranking or metric
/// computations. Rebuilding means building a new matrix from the full
/// catalog.
///
/// Only the upper triangle is computed; the lower triangle is mirrored
/// from it, so `value(i, j) == value(j, i)` holds exactly rather than up
/// to floating-point error. The diagonal is exactly 1.0 for items with a
/// non-zero vector and 0.0 for all-zero vectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    n: usize,
    /// Row-major: `data[i * n + j]` is the similarity between items i and j.
    data: Vec<f32>,
}

impl SimilarityMatrix {
    /// Compute the pairwise similarity matrix for `vectors`.
    ///
    /// All vectors must share one dimension; otherwise this fails with
    /// [`Error::InvalidDimension`]. An empty input yields an empty 0x0
    /// matrix.
    pub fn build(vectors: &[TagVector]) -> Result<Self> {
        let n = vectors.len();
        if n == 0 {
            return Ok(Self { n: 0, data: Vec::new() });
        }

        let dim = vectors[0].dim();
        for vector in vectors {
            if vector.dim() != dim {
                return Err(Error::InvalidDimension {
                    expected: dim,
                    actual: vector.dim(),
                });
            }
        }

        let norms: Vec<f32> = vectors.iter().map(TagVector::norm).collect();

        // Upper triangle only, row-parallel. rows[i][off] holds the
        // similarity of (i, i + off).
        let rows: Vec<Vec<f32>> = (0..n)
            .into_par_iter()
            .map(|i| {
                (i..n)
                    .map(|j| {
                        if i == j {
                            if norms[i] > 0.0 {
                                1.0
                            } else {
                                0.0
                            }
                        } else if norms[i] == 0.0 || norms[j] == 0.0 {
                            0.0
                        } else {
                            vectors[i].dot(&vectors[j]) as f32 / (norms[i] * norms[j])
                        }
                    })
                    .collect()
            })
            .collect();

        let mut data = vec![0.0f32; n * n];
        for (i, row) in rows.iter().enumerate() {
            for (off, &sim) in row.iter().enumerate() {
                let j = i + off;
                data[i * n + j] = sim;
                data[j * n + i] = sim;
            }
        }

        Ok(Self { n, data })
    }

    /// Number of items covered by the matrix.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity between items `i` and `j`, or `None` when either index
    /// is out of range.
    #[inline]
    #[must_use]
    pub fn value(&self, i: usize, j: usize) -> Option<f32> {
        if i < self.n && j < self.n {
            Some(self.data[i * self.n + j])
        } else {
            None
        }
    }

    /// Full similarity row for item `i`.
    #[inline]
    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[f32]> {
        if i < self.n {
            Some(&self.data[i * self.n..(i + 1) * self.n])
        } else {
            None
        }
    }
}
