

use std::cmp::Ordering;

use super::vectorizer::SparseVector;


pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    if a.is_zero() || b.is_zero() {
        return 0.0;
    }

    let mag_a = a.norm();
    let mag_b = b.norm();
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    (a.dot(b) / (mag_a * mag_b)).clamp(-1.0, 1.0)
}


pub fn batch_cosine_similarity(query: &SparseVector, corpus: &[SparseVector]) -> Vec<f64> {
    corpus
        .iter()
        .map(|row| cosine_similarity(query, row))
        .collect()
}


/// Descending score order. Stable, so equal scores keep corpus order.
pub fn rank_indices(scores: &[f64]) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked
}
