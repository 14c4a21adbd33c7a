pub mod collapse_whitespace;
pub use collapse_whitespace::collapse_whitespace;

pub mod cosine_similarity;
pub use cosine_similarity::cosine_similarity;

pub mod parse_vector_components;
pub use parse_vector_components::parse_vector_components;

pub mod read_artifact_file;
pub use read_artifact_file::read_artifact_file;

pub mod read_corpus;
pub use read_corpus::read_corpus_from_string;

pub mod read_projection_model;
pub use read_projection_model::read_projection_model_from_string;

pub mod read_term_dictionary;
pub use read_term_dictionary::read_term_dictionary_from_string;

pub mod read_weighting_model;
pub use read_weighting_model::read_weighting_model_from_string;

pub mod read_word_list;
pub use read_word_list::read_word_list_from_string;

pub mod retain_printable_ascii;
pub use retain_printable_ascii::retain_printable_ascii;

pub mod tsv_reader;
pub use tsv_reader::tsv_reader;

pub mod word_tokenize;
pub use word_tokenize::word_tokenize;
