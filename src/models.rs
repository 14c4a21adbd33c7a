pub mod corpus;
pub use corpus::{Corpus, CorpusDocument};

pub mod error;
pub use error::Error;

pub mod game_sage;
pub use game_sage::GameSage;

pub mod lemmatizer;
pub use lemmatizer::{Lemmatizer, RuleLemmatizer, WordClass};

pub mod normalizer_resources;
pub use normalizer_resources::NormalizerResources;

pub mod phrase_tokenizer;
pub use phrase_tokenizer::PhraseTokenizer;

pub mod pipeline_variant;
pub use pipeline_variant::PipelineVariant;

pub mod pos_tagger;
pub use pos_tagger::{HeuristicPosTagger, PosTagger};

pub mod projection_model;
pub use projection_model::{LsaProjection, ProjectionModel};

pub mod ranked_entry;
pub use ranked_entry::{RankedEntry, RankedList};

pub mod semantic_artifacts;
pub use semantic_artifacts::SemanticArtifacts;

pub mod semantic_vector;
pub use semantic_vector::SemanticVector;

pub mod similarity_ranker;
pub use similarity_ranker::{RankedResults, SimilarityRanker, SimilarityRankerConfig};

pub mod stop_word_filter;
pub use stop_word_filter::StopWordFilter;

pub mod term_dictionary;
pub use term_dictionary::TermDictionary;

pub mod text_normalizer;
pub use text_normalizer::{TextNormalizer, TextNormalizerConfig};

pub mod vector_folder;
pub use vector_folder::VectorFolder;

pub mod weighting_model;
pub use weighting_model::{TfIdfModel, WeightingModel};
