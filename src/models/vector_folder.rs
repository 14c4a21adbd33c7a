use crate::types::{SparseVector, TermId};
use crate::{ProjectionModel, SemanticVector, TermDictionary, WeightingModel};
use log::{debug, info};
use std::collections::BTreeMap;

/// Folds normalized token streams into the semantic space of a pretrained model triple.
pub struct VectorFolder<'a> {
    term_dictionary: &'a TermDictionary,
    weighting_model: &'a dyn WeightingModel,
    projection_model: &'a dyn ProjectionModel,
}

impl<'a> VectorFolder<'a> {
    pub fn new(
        term_dictionary: &'a TermDictionary,
        weighting_model: &'a dyn WeightingModel,
        projection_model: &'a dyn ProjectionModel,
    ) -> Self {
        VectorFolder {
            term_dictionary,
            weighting_model,
            projection_model,
        }
    }

    /// Bag-of-terms counts for a whitespace-delimited token stream, sorted by term ID.
    ///
    /// Tokens missing from the term dictionary are dropped.
    pub fn count_terms(&self, token_stream: &str) -> SparseVector {
        let mut counts: BTreeMap<TermId, f64> = BTreeMap::new();

        for token in token_stream.split_whitespace() {
            if let Some(term_id) = self.term_dictionary.get_term_id(token) {
                *counts.entry(term_id).or_insert(0.0) += 1.0;
            }
        }

        counts.into_iter().collect()
    }

    /// Weighs and projects the token stream, then drops dimension 0.
    pub fn fold(&self, token_stream: &str) -> SemanticVector {
        info!("Folding text into semantic space...");

        let term_counts = self.count_terms(token_stream);
        if term_counts.is_empty() {
            debug!("No known terms in token stream; folding to the zero vector");
        }

        let weighted_terms = self.weighting_model.weigh(&term_counts);
        let projected = self.projection_model.project(&weighted_terms);

        SemanticVector::from_projection(projected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LsaProjection, TfIdfModel};
    use std::collections::HashMap;

    #[test]
    fn test_count_terms_drops_unknown_tokens() {
        let term_dictionary = TermDictionary::from_terms(["dragon", "sword"]);
        let weighting_model = TfIdfModel::new(HashMap::new(), true);
        let projection_model = LsaProjection::new(2, HashMap::new()).unwrap();
        let folder = VectorFolder::new(&term_dictionary, &weighting_model, &projection_model);

        assert_eq!(
            folder.count_terms("sword dragon banana sword"),
            vec![(0, 1.0), (1, 2.0)]
        );
    }
}
