use crate::config::DEFAULT_SIMILARITY_RANKER_CONFIG;
use crate::types::ExternalIdRef;
use crate::{
    Corpus, Error, NormalizerResources, PhraseTokenizer, PipelineVariant, ProjectionModel,
    RankedResults, SemanticVector, SimilarityRanker, SimilarityRankerConfig, TermDictionary,
    TextNormalizer, VectorFolder, WeightingModel,
};
use log::debug;

/// Normalizes text, folds it into the semantic space and ranks the corpus against it.
///
/// Everything is borrowed and read-only, so one instance can serve concurrent requests.
pub struct GameSage<'a> {
    term_dictionary: &'a TermDictionary,
    weighting_model: &'a dyn WeightingModel,
    projection_model: &'a dyn ProjectionModel,
    corpus: &'a Corpus,
    resources: &'a NormalizerResources,
    ranker_config: &'a SimilarityRankerConfig,
    entity_names: PhraseTokenizer,
}

impl<'a> GameSage<'a> {
    /// # Errors
    /// Fails with `DimensionMismatch` when the projection does not produce vectors of the
    /// corpus dimension plus the dropped dimension 0.
    pub fn new(
        term_dictionary: &'a TermDictionary,
        weighting_model: &'a dyn WeightingModel,
        projection_model: &'a dyn ProjectionModel,
        corpus: &'a Corpus,
        resources: &'a NormalizerResources,
    ) -> Result<Self, Error> {
        if !corpus.is_empty() && projection_model.dimension() != corpus.dimension() + 1 {
            return Err(Error::DimensionMismatch {
                expected: corpus.dimension() + 1,
                found: projection_model.dimension(),
            });
        }

        let entity_names = PhraseTokenizer::from_titles(corpus.titles());
        debug!("Built {} multi-word entity names", entity_names.len());

        Ok(GameSage {
            term_dictionary,
            weighting_model,
            projection_model,
            corpus,
            resources,
            ranker_config: DEFAULT_SIMILARITY_RANKER_CONFIG,
            entity_names,
        })
    }

    pub fn with_ranker_config(mut self, ranker_config: &'a SimilarityRankerConfig) -> Self {
        self.ranker_config = ranker_config;
        self
    }

    pub fn corpus(&self) -> &Corpus {
        self.corpus
    }

    pub fn normalize(&self, text: &str, variant: PipelineVariant) -> String {
        TextNormalizer::new(variant.config(), self.resources, &self.entity_names).normalize(text)
    }

    pub fn fold(&self, token_stream: &str) -> SemanticVector {
        VectorFolder::new(
            self.term_dictionary,
            self.weighting_model,
            self.projection_model,
        )
        .fold(token_stream)
    }

    pub fn related_games(
        &self,
        text: &str,
        variant: PipelineVariant,
    ) -> Result<RankedResults, Error> {
        let token_stream = self.normalize(text, variant);
        let query_vector = self.fold(&token_stream);

        self.ranker().rank(&query_vector)
    }

    /// The most and least related lists in their serialized form.
    pub fn compute_related_games(
        &self,
        text: &str,
        variant: PipelineVariant,
    ) -> Result<(String, String), Error> {
        let results = self.related_games(text, variant)?;

        Ok((
            results.most_related.to_string(),
            results.least_related.to_string(),
        ))
    }

    /// Ranks the corpus against one of its own games, leaving that game out.
    pub fn related_games_for_document(
        &self,
        external_id: &ExternalIdRef,
    ) -> Result<RankedResults, Error> {
        let document = self.corpus.document(external_id)?;

        self.ranker()
            .rank_excluding(&document.vector, Some(external_id))
    }

    fn ranker(&self) -> SimilarityRanker<'_> {
        SimilarityRanker::new(self.corpus, self.ranker_config)
    }
}
