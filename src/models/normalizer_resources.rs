use crate::constants::{DEFAULT_MULTIWORD_PLATFORM_NAMES, DEFAULT_STOP_WORDS};
use crate::types::Token;
use crate::utils::read_word_list_from_string;
use crate::{
    HeuristicPosTagger, Lemmatizer, PhraseTokenizer, PosTagger, RuleLemmatizer, TermDictionary,
};
use std::collections::HashSet;

/// External resources used by the text normalizer, loaded once and shared by every request.
pub struct NormalizerResources {
    pub stop_words: HashSet<Token>,
    pub platform_names: PhraseTokenizer,
    pub lemmatizer: Box<dyn Lemmatizer>,
    pub pos_tagger: Box<dyn PosTagger>,
}

impl NormalizerResources {
    pub fn new(
        stop_words: HashSet<Token>,
        platform_names: PhraseTokenizer,
        lemmatizer: Box<dyn Lemmatizer>,
        pos_tagger: Box<dyn PosTagger>,
    ) -> Self {
        NormalizerResources {
            stop_words,
            platform_names,
            lemmatizer,
            pos_tagger,
        }
    }

    /// The bundled stop words and platform names, the heuristic tagger, and a rule lemmatizer
    /// whose lexicon is the vocabulary of `term_dictionary`.
    pub fn with_defaults(term_dictionary: &TermDictionary) -> Self {
        Self::new(
            read_word_list_from_string(DEFAULT_STOP_WORDS)
                .into_iter()
                .collect(),
            PhraseTokenizer::new(read_word_list_from_string(DEFAULT_MULTIWORD_PLATFORM_NAMES)),
            Box::new(RuleLemmatizer::with_lexicon(term_dictionary.terms())),
            Box::new(HeuristicPosTagger::new()),
        )
    }
}
