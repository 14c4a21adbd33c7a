use crate::constants::CONTRACTION_STOP_WORDS;
use crate::models::{SimilarityRankerConfig, TextNormalizerConfig};

/// Preprocessing matching the Wikipedia-derived ("ontology") corpus.
pub const ONTOLOGY_NORMALIZER_CONFIG: &TextNormalizerConfig = &TextNormalizerConfig {
    newline_replacement: " ",
    tokenize_phrases: true,
    pos_filter: false,
    lowercase_tagged_tokens: false,
    extra_stop_words: &[],
};

/// Preprocessing matching the GameFAQs-derived ("gameplay") corpus.
pub const GAMEPLAY_NORMALIZER_CONFIG: &TextNormalizerConfig = &TextNormalizerConfig {
    newline_replacement: ". ",
    tokenize_phrases: false,
    pos_filter: true,
    lowercase_tagged_tokens: true,
    extra_stop_words: CONTRACTION_STOP_WORDS,
};

pub const DEFAULT_SIMILARITY_RANKER_CONFIG: &SimilarityRankerConfig =
    &SimilarityRankerConfig { max_entries: 50 };
