use crate::types::{SparseVector, TermId};
use std::collections::HashMap;

/// Weights below this magnitude are dropped from the weighted vector.
const WEIGHT_EPSILON: f64 = 1e-12;

/// A fixed term-weighting transform applied to raw term counts before projection.
pub trait WeightingModel: Send + Sync {
    /// Turns a sparse count vector (sorted by term ID) into a sparse weighted vector (sorted by
    /// term ID).
    fn weigh(&self, term_counts: &SparseVector) -> SparseVector;
}

/// TF-IDF weighting: each count is multiplied by the inverse document frequency of its term,
/// optionally followed by L2 normalization.
///
/// Terms without an IDF are dropped.
#[derive(Debug, Clone)]
pub struct TfIdfModel {
    idfs: HashMap<TermId, f64>,
    normalize: bool,
}

impl TfIdfModel {
    pub fn new(idfs: HashMap<TermId, f64>, normalize: bool) -> Self {
        Self { idfs, normalize }
    }

    pub fn idf(&self, term_id: TermId) -> Option<f64> {
        self.idfs.get(&term_id).copied()
    }
}

impl WeightingModel for TfIdfModel {
    fn weigh(&self, term_counts: &SparseVector) -> SparseVector {
        let mut weighted: SparseVector = term_counts
            .iter()
            .filter_map(|&(term_id, count)| self.idf(term_id).map(|idf| (term_id, count * idf)))
            .collect();

        if self.normalize {
            let length = weighted
                .iter()
                .map(|(_, weight)| weight * weight)
                .sum::<f64>()
                .sqrt();

            if length > 0.0 {
                for (_, weight) in weighted.iter_mut() {
                    *weight /= length;
                }
            }
        }

        weighted.retain(|(_, weight)| weight.abs() > WEIGHT_EPSILON);
        weighted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighs_and_normalizes() {
        let model = TfIdfModel::new(HashMap::from([(0, 3.0), (1, 4.0)]), true);
        let weighted = model.weigh(&vec![(0, 1.0), (1, 1.0)]);

        assert_eq!(weighted.len(), 2);
        assert!((weighted[0].1 - 0.6).abs() < 1e-12);
        assert!((weighted[1].1 - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_drops_terms_without_idf() {
        let model = TfIdfModel::new(HashMap::from([(0, 2.0)]), false);
        assert_eq!(model.weigh(&vec![(0, 2.0), (7, 1.0)]), vec![(0, 4.0)]);
    }

    #[test]
    fn test_empty_counts() {
        let model = TfIdfModel::new(HashMap::from([(0, 2.0)]), true);
        assert!(model.weigh(&vec![]).is_empty());
    }
}
