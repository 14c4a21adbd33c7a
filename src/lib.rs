#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::{
    DEFAULT_SIMILARITY_RANKER_CONFIG, GAMEPLAY_NORMALIZER_CONFIG, ONTOLOGY_NORMALIZER_CONFIG,
};
mod constants;
pub mod models;
pub use models::{
    Corpus, CorpusDocument, Error, GameSage, HeuristicPosTagger, Lemmatizer, LsaProjection,
    NormalizerResources, PhraseTokenizer, PipelineVariant, PosTagger, ProjectionModel,
    RankedEntry, RankedList, RankedResults, RuleLemmatizer, SemanticArtifacts, SemanticVector,
    SimilarityRanker, SimilarityRankerConfig, StopWordFilter, TermDictionary, TextNormalizer,
    TextNormalizerConfig, TfIdfModel, VectorFolder, WeightingModel, WordClass,
};
pub mod types;
pub use types::{
    CorpusPosition, ExternalId, ExternalIdRef, PosTag, Score, SparseVector, TaggedToken, TermId,
    Token, TokenRef,
};
mod utils;
pub use utils::word_tokenize;

/// Recommends the games most and least related to `raw_text`, using the bundled normalization
/// resources.
///
/// Returns both lists in their serialized `id&score,id&score` form.
///
/// The normalization resources and the entity-name table are rebuilt on every call. Callers
/// serving many requests should build them once through [`SemanticArtifacts::game_sage`] (or
/// [`GameSage::new`]) and reuse the resulting `GameSage`.
pub fn compute_related_games(
    raw_text: &str,
    pipeline_variant: PipelineVariant,
    term_dictionary: &TermDictionary,
    weighting_model: &dyn WeightingModel,
    projection_model: &dyn ProjectionModel,
    corpus: &Corpus,
) -> Result<(String, String), Error> {
    let resources = NormalizerResources::with_defaults(term_dictionary);

    compute_related_games_with_resources(
        raw_text,
        pipeline_variant,
        term_dictionary,
        weighting_model,
        projection_model,
        corpus,
        &resources,
    )
}

pub fn compute_related_games_with_resources(
    raw_text: &str,
    pipeline_variant: PipelineVariant,
    term_dictionary: &TermDictionary,
    weighting_model: &dyn WeightingModel,
    projection_model: &dyn ProjectionModel,
    corpus: &Corpus,
    resources: &NormalizerResources,
) -> Result<(String, String), Error> {
    let game_sage = GameSage::new(
        term_dictionary,
        weighting_model,
        projection_model,
        corpus,
        resources,
    )?;

    game_sage.compute_related_games(raw_text, pipeline_variant)
}
