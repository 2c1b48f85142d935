//! Diversity measures over recommendation lists.
//!
//! Both measures read the prebuilt similarity matrix; a list is diverse
//! when its items are mutually dissimilar.

use mindrec_core::SimilarityMatrix;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("Item index out of range: {index} (matrix covers {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Core(#[from] mindrec_core::Error),
}

fn checked_value(matrix: &SimilarityMatrix, i: usize, j: usize) -> Result<f32, EvalError> {
    matrix.value(i, j).ok_or(EvalError::IndexOutOfRange {
        index: i.max(j),
        len: matrix.len(),
    })
}

/// Mean pairwise dissimilarity `1 - sim[i][j]` over all unordered pairs
/// in `indices`.
///
/// Returns 0.0 for lists with fewer than two items; fails with
/// [`EvalError::IndexOutOfRange`] when an index falls outside the
/// matrix.
pub fn intra_list_diversity(
    matrix: &SimilarityMatrix,
    indices: &[usize],
) -> Result<f32, EvalError> {
    if indices.len() < 2 {
        return Ok(0.0);
    }

    let mut total = 0.0f32;
    let mut pairs = 0u32;
    for (offset, &i) in indices.iter().enumerate() {
        for &j in &indices[offset + 1..] {
            total += 1.0 - checked_value(matrix, i, j)?;
            pairs += 1;
        }
    }

    Ok(total / pairs as f32)
}

/// Mean intra-list diversity over all lists with at least two items.
///
/// Returns 0.0 when no list qualifies.
pub fn average_diversity(
    matrix: &SimilarityMatrix,
    all_recommendations: &[Vec<usize>],
) -> Result<f32, EvalError> {
    let mut total = 0.0f32;
    let mut counted = 0u32;
    for list in all_recommendations {
        if list.len() < 2 {
            continue;
        }
        total += intra_list_diversity(matrix, list)?;
        counted += 1;
    }

    if counted == 0 {
        Ok(0.0)
    } else {
        Ok(total / counted as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindrec_core::TagVector;

    fn sample_matrix() -> SimilarityMatrix {
        // Items 0 and 1 are identical; item 2 is orthogonal to both.
        SimilarityMatrix::build(&[
            TagVector::new(vec![1, 0]),
            TagVector::new(vec![1, 0]),
            TagVector::new(vec![0, 1]),
        ])
        .unwrap()
    }

    #[test]
    fn test_identical_items_have_zero_diversity() {
        let matrix = sample_matrix();
        let diversity = intra_list_diversity(&matrix, &[0, 1]).unwrap();
        assert!(diversity.abs() < 1e-6);
    }

    #[test]
    fn test_orthogonal_items_have_full_diversity() {
        let matrix = sample_matrix();
        let diversity = intra_list_diversity(&matrix, &[0, 2]).unwrap();
        assert!((diversity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_mixed_list_averages_pairs() {
        let matrix = sample_matrix();
        // Pairs: (0,1)=0.0, (0,2)=1.0, (1,2)=1.0 dissimilarity.
        let diversity = intra_list_diversity(&matrix, &[0, 1, 2]).unwrap();
        assert!((diversity - 2.0 / 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_short_lists_are_zero() {
        let matrix = sample_matrix();
        assert_eq!(intra_list_diversity(&matrix, &[]).unwrap(), 0.0);
        assert_eq!(intra_list_diversity(&matrix, &[1]).unwrap(), 0.0);
    }

    #[test]
    fn test_out_of_range_index_is_typed_error() {
        let matrix = sample_matrix();
        let err = intra_list_diversity(&matrix, &[0, 9]).unwrap_err();
        assert!(matches!(err, EvalError::IndexOutOfRange { index: 9, len: 3 }));
    }

    #[test]
    fn test_average_diversity_skips_short_lists() {
        let matrix = sample_matrix();
        let lists = vec![vec![0], vec![0, 2], vec![1, 2]];
        let avg = average_diversity(&matrix, &lists).unwrap();
        assert!((avg - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_average_diversity_no_qualifying_lists() {
        let matrix = sample_matrix();
        assert_eq!(average_diversity(&matrix, &[vec![0]]).unwrap(), 0.0);
        assert_eq!(average_diversity(&matrix, &[]).unwrap(), 0.0);
    }
}
