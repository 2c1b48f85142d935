use ordered_float::OrderedFloat;
use std::cmp::Reverse;

use crate::matrix::SimilarityMatrix;
use crate::{Error, Result};

/// Indices of the `k` items most similar to `query`, excluding the query
/// itself.
///
/// Candidates are sorted by similarity descending; ties resolve by
/// ascending item index. The tie-break comes from running a stable sort
/// over an ascending-index candidate list, and is part of the contract:
/// equal scores always rank the lower index first. `k == 0` yields an
/// empty list; `k >= len - 1` yields every other item.
pub fn top_k(matrix: &SimilarityMatrix, query: usize, k: usize) -> Result<Vec<usize>> {
    let row = matrix.row(query).ok_or(Error::IndexOutOfRange {
        index: query,
        len: matrix.len(),
    })?;

    let mut candidates: Vec<usize> = (0..matrix.len()).filter(|&j| j != query).collect();
    candidates.sort_by_key(|&j| Reverse(OrderedFloat(row[j])));
    candidates.truncate(k);

    Ok(candidates)
}
