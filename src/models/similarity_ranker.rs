use crate::types::{CorpusPosition, ExternalIdRef, Score};
use crate::utils::cosine_similarity;
use crate::{Corpus, Error, RankedEntry, RankedList, SemanticVector};
use log::{debug, info};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct SimilarityRankerConfig {
    /// Maximum length of each returned list.
    pub max_entries: usize,
}

/// The most and least related corpus games for one query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedResults {
    /// Non-increasing score.
    pub most_related: RankedList,
    /// Non-decreasing score; the most dissimilar game comes first.
    pub least_related: RankedList,
}

pub struct SimilarityRanker<'a> {
    corpus: &'a Corpus,
    config: &'a SimilarityRankerConfig,
}

impl<'a> SimilarityRanker<'a> {
    pub fn new(corpus: &'a Corpus, config: &'a SimilarityRankerConfig) -> Self {
        SimilarityRanker { corpus, config }
    }

    pub fn rank(&self, query_vector: &SemanticVector) -> Result<RankedResults, Error> {
        self.rank_excluding(query_vector, None)
    }

    /// Ranks the corpus against the query, leaving out the corpus game `excluded_id` if given.
    ///
    /// Ties keep corpus order in both lists.
    pub fn rank_excluding(
        &self,
        query_vector: &SemanticVector,
        excluded_id: Option<&ExternalIdRef>,
    ) -> Result<RankedResults, Error> {
        info!("Ranking corpus...");

        if !self.corpus.is_empty() && query_vector.dimension() != self.corpus.dimension() {
            return Err(Error::DimensionMismatch {
                expected: self.corpus.dimension(),
                found: query_vector.dimension(),
            });
        }

        let excluded_position = match excluded_id {
            Some(external_id) => Some(
                self.corpus
                    .position_of(external_id)
                    .ok_or_else(|| Error::UnknownExternalId(external_id.to_string()))?,
            ),
            None => None,
        };

        let scores = self.score_documents(query_vector, excluded_position);
        debug!("Scored {} corpus documents", scores.len());

        let mut most_related = scores.clone();
        most_related.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        let mut least_related = scores;
        least_related.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));

        Ok(RankedResults {
            most_related: self.to_ranked_list(most_related),
            least_related: self.to_ranked_list(least_related),
        })
    }

    fn score_documents(
        &self,
        query_vector: &SemanticVector,
        excluded_position: Option<CorpusPosition>,
    ) -> Vec<(CorpusPosition, Score)> {
        self.corpus
            .documents()
            .par_iter()
            .enumerate()
            .filter(|(position, _)| Some(*position) != excluded_position)
            .map(|(position, document)| {
                (
                    position,
                    cosine_similarity(query_vector.as_slice(), document.vector.as_slice()),
                )
            })
            .filter(|(_, score)| !score.is_nan())
            .collect()
    }

    fn to_ranked_list(&self, sorted_scores: Vec<(CorpusPosition, Score)>) -> RankedList {
        sorted_scores
            .into_iter()
            .take(self.config.max_entries)
            .filter_map(|(position, score)| {
                self.corpus
                    .external_id_at(position)
                    .map(|external_id| RankedEntry::new(external_id, score))
            })
            .collect::<Vec<_>>()
            .into()
    }
}
