//! Rank-quality and coverage metrics.
//!
//! All functions are pure: they take ranked index lists plus relevance
//! information and return a score. Degenerate inputs (k of zero, empty
//! relevant sets, zero ideal DCG, empty catalogs) are well-defined zero
//! results per contract, not errors.

use ahash::AHashSet;

/// Precision@K: `|recommended[:k] ∩ relevant| / k`.
///
/// Returns 0.0 when `k == 0`.
#[must_use]
pub fn precision_at_k(recommended: &[usize], relevant: &AHashSet<usize>, k: usize) -> f32 {
    if k == 0 {
        return 0.0;
    }

    let rec_k: AHashSet<usize> = recommended.iter().take(k).copied().collect();
    rec_k.intersection(relevant).count() as f32 / k as f32
}

/// Recall@K: `|recommended[:k] ∩ relevant| / |relevant|`.
///
/// Returns 0.0 when `relevant` is empty.
#[must_use]
pub fn recall_at_k(recommended: &[usize], relevant: &AHashSet<usize>, k: usize) -> f32 {
    if relevant.is_empty() {
        return 0.0;
    }

    let rec_k: AHashSet<usize> = recommended.iter().take(k).copied().collect();
    rec_k.intersection(relevant).count() as f32 / relevant.len() as f32
}

/// Reciprocal rank of the first relevant recommendation (1-indexed).
///
/// Returns 0.0 if no recommended item is relevant.
#[must_use]
pub fn mrr(recommended: &[usize], relevant: &AHashSet<usize>) -> f32 {
    for (i, item) in recommended.iter().enumerate() {
        if relevant.contains(item) {
            return 1.0 / (i + 1) as f32;
        }
    }
    0.0
}

/// Discounted Cumulative Gain over the first `k` grades.
///
/// `DCG@K = Σ grade_i / log2(i + 2)`, so rank 1 contributes its grade
/// undiscounted. Returns 0.0 for an empty grade sequence.
#[must_use]
pub fn dcg_at_k(grades: &[f32], k: usize) -> f32 {
    grades
        .iter()
        .take(k)
        .enumerate()
        .map(|(i, &grade)| grade / (i as f32 + 2.0).log2())
        .sum()
}

/// Normalized DCG@K of a recommendation list.
///
/// `relevance` grades any catalog index; the ideal ordering sorts the
/// grades of all `catalog_size` items descending and takes the first
/// `k`. Returns 0.0 when the ideal DCG is not positive (no relevance
/// anywhere in the catalog).
#[must_use]
pub fn ndcg_at_k(
    recommended: &[usize],
    relevance: impl Fn(usize) -> f32,
    catalog_size: usize,
    k: usize,
) -> f32 {
    let grades: Vec<f32> = recommended.iter().take(k).map(|&i| relevance(i)).collect();

    let mut ideal: Vec<f32> = (0..catalog_size).map(&relevance).collect();
    ideal.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    ideal.truncate(k);

    let idcg = dcg_at_k(&ideal, k);
    if idcg <= 0.0 {
        return 0.0;
    }

    dcg_at_k(&grades, k) / idcg
}

/// Fraction of the catalog that appears in at least one recommendation
/// list.
///
/// Returns 0.0 when `catalog_size == 0`.
#[must_use]
pub fn catalog_coverage(all_recommendations: &[Vec<usize>], catalog_size: usize) -> f32 {
    if catalog_size == 0 {
        return 0.0;
    }

    let covered: AHashSet<usize> = all_recommendations
        .iter()
        .flat_map(|list| list.iter().copied())
        .collect();
    covered.len() as f32 / catalog_size as f32
}
