use crate::constants::{
    COMMON_NOUN_TAGS, MAX_LEMMATIZATION_PASSES, NEWLINE_CHARACTERS, PRELIMINARY_PUNCTUATION,
    SYMBOLS_REMOVED, SYMBOLS_REPLACED_WITH_SPACE, VERB_TAGS,
};
use crate::types::{TaggedToken, Token, TokenRef};
use crate::utils::{collapse_whitespace, retain_printable_ascii, word_tokenize};
use crate::{NormalizerResources, PhraseTokenizer, StopWordFilter, WordClass};
use log::{debug, info};
use std::collections::HashMap;

/// Parameters distinguishing the preprocessing pipelines.
#[derive(Debug, Clone, Copy)]
pub struct TextNormalizerConfig {
    /// What newlines, carriage returns and tabs become.
    pub newline_replacement: &'static str,
    /// Merge multi-word entity and platform names into single tokens.
    pub tokenize_phrases: bool,
    /// Tag the text and keep only verbs and common nouns, lemmatizing by word class.
    pub pos_filter: bool,
    /// Only used together with `pos_filter`.
    pub lowercase_tagged_tokens: bool,
    /// Stop words on top of the shared stop word set.
    pub extra_stop_words: &'static [&'static str],
}

type LemmaCache = HashMap<(Token, Option<WordClass>), Token>;

/// Turns raw text into the space-delimited token stream a semantic space was trained on.
pub struct TextNormalizer<'a> {
    config: &'a TextNormalizerConfig,
    resources: &'a NormalizerResources,
    entity_names: &'a PhraseTokenizer,
}

impl<'a> TextNormalizer<'a> {
    pub fn new(
        config: &'a TextNormalizerConfig,
        resources: &'a NormalizerResources,
        entity_names: &'a PhraseTokenizer,
    ) -> Self {
        TextNormalizer {
            config,
            resources,
            entity_names,
        }
    }

    pub fn normalize(&self, text: &str) -> String {
        info!("Normalizing text...");

        let text = retain_printable_ascii(text);
        let text = text.replace(NEWLINE_CHARACTERS, self.config.newline_replacement);

        let normalized = if self.config.pos_filter {
            self.normalize_tagged(&text)
        } else {
            self.normalize_untagged(&text)
        };

        debug!("Normalized token stream: {}", normalized);

        normalized
    }

    fn stop_word_filter(&self) -> StopWordFilter<'_> {
        StopWordFilter::new(&self.resources.stop_words, self.config.extra_stop_words)
    }

    fn normalize_untagged(&self, text: &str) -> String {
        let text = text.replace(PRELIMINARY_PUNCTUATION, " ").to_lowercase();
        let mut text = collapse_whitespace(&text);

        if self.config.tokenize_phrases {
            text = self.entity_names.tokenize(&text);
            text = self.resources.platform_names.tokenize(&text);
        }

        let text = collapse_whitespace(&remove_symbols(&text));

        let stop_word_filter = self.stop_word_filter();
        let mut cache = LemmaCache::new();

        let mut tokens = stop_word_filter.filter(&text);

        for _ in 0..MAX_LEMMATIZATION_PASSES {
            let lemmas: Vec<Token> = tokens
                .iter()
                .map(|token| self.lemmatize(&mut cache, token, None))
                .collect();

            if lemmas == tokens {
                break;
            }
            tokens = lemmas;
        }

        // Lemmas can themselves be stop words
        stop_word_filter.filter(&tokens.join(" ")).join(" ")
    }

    fn normalize_tagged(&self, text: &str) -> String {
        let text = remove_symbols(text);
        let tokens = word_tokenize(&text);

        let mut tagged: Vec<TaggedToken> = self
            .resources
            .pos_tagger
            .tag(&tokens)
            .into_iter()
            .filter(|(token, tag)| {
                !token.is_empty()
                    && (VERB_TAGS.contains(&tag.as_str()) || COMMON_NOUN_TAGS.contains(&tag.as_str()))
            })
            .map(|(token, tag)| {
                let token = if self.config.lowercase_tagged_tokens {
                    token.to_lowercase()
                } else {
                    token
                };
                (strip_digits(&token), tag)
            })
            .collect();

        debug!("Tagged tokens: {:?}", tagged);

        let stop_word_filter = self.stop_word_filter();
        let mut cache = LemmaCache::new();

        for _ in 0..MAX_LEMMATIZATION_PASSES {
            let mut changed = false;

            for (token, tag) in tagged.iter_mut() {
                if token.is_empty() {
                    continue;
                }

                let mut lemma = self.lemmatize(&mut cache, token, WordClass::from_penn_tag(tag));
                if stop_word_filter.is_noise(&lemma) {
                    lemma.clear();
                }

                if lemma != *token {
                    *token = lemma;
                    changed = true;
                }
            }

            if !changed {
                break;
            }
        }

        let tokens: Vec<&str> = tagged
            .iter()
            .map(|(token, _)| token.as_str())
            .filter(|token| !token.is_empty())
            .collect();

        collapse_whitespace(&tokens.join(" "))
    }

    fn lemmatize(
        &self,
        cache: &mut LemmaCache,
        token: &TokenRef,
        word_class: Option<WordClass>,
    ) -> Token {
        cache
            .entry((token.to_string(), word_class))
            .or_insert_with(|| self.resources.lemmatizer.lemmatize(token, word_class))
            .clone()
    }
}

fn remove_symbols(text: &str) -> String {
    text.replace(SYMBOLS_REPLACED_WITH_SPACE, " ")
        .replace(SYMBOLS_REMOVED, "")
}

/// Drops digits; a token with anything outside of ASCII left is dropped entirely.
fn strip_digits(token: &TokenRef) -> Token {
    let stripped: Token = token.chars().filter(|c| !c.is_ascii_digit()).collect();

    if stripped.is_ascii() {
        stripped
    } else {
        Token::new()
    }
}
