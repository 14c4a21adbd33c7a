use crate::types::TokenRef;
use crate::utils::collapse_whitespace;
use log::debug;
use std::collections::HashSet;

/// Merges known multi-word names into single underscore-joined tokens.
///
/// Phrases are applied longest first (by word count), so a full name is never pre-empted by one
/// of its sub-phrases.
#[derive(Debug, Clone, Default)]
pub struct PhraseTokenizer {
    /// Space padded phrases and their space padded, underscore-joined replacements.
    replacements: Vec<(String, String)>,
}

impl PhraseTokenizer {
    /// Builds a tokenizer from lowercase phrases. Single-word phrases and duplicates are ignored.
    ///
    /// Phrases outside of printable ASCII can never occur in normalized text and are skipped.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<TokenRef>,
    {
        let mut seen = HashSet::new();
        let mut phrase_words: Vec<Vec<String>> = Vec::new();

        for phrase in phrases {
            let phrase = phrase.as_ref();

            if !phrase.chars().all(|c| c.is_ascii_graphic() || c == ' ') {
                debug!("Skipping phrase with unsupported characters: {}", phrase);
                continue;
            }

            let words: Vec<String> = phrase.split_whitespace().map(str::to_string).collect();
            if words.len() > 1 && seen.insert(words.clone()) {
                phrase_words.push(words);
            }
        }

        // Stable, so phrases of equal length keep their given order
        phrase_words.sort_by(|a, b| b.len().cmp(&a.len()));

        let replacements = phrase_words
            .into_iter()
            .map(|words| {
                (
                    format!(" {} ", words.join(" ")),
                    format!(" {} ", words.join("_")),
                )
            })
            .collect();

        PhraseTokenizer { replacements }
    }

    /// Builds the entity-name table from corpus titles, lowercased.
    pub fn from_titles<'t, I>(titles: I) -> Self
    where
        I: IntoIterator<Item = &'t str>,
    {
        Self::new(titles.into_iter().map(|title| title.to_lowercase()))
    }

    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    pub fn tokenize(&self, text: &str) -> String {
        let mut text = format!(" {} ", text);

        for (phrase, joined) in &self.replacements {
            // Adjacent occurrences share a boundary space, so one pass can leave some behind
            while text.contains(phrase.as_str()) {
                text = text.replace(phrase.as_str(), joined);
            }
        }

        collapse_whitespace(&text)
    }
}
