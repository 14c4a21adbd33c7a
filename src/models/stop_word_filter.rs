use crate::types::{Token, TokenRef};
use std::collections::HashSet;

/// Drops stop words and single-character tokens.
pub struct StopWordFilter<'a> {
    stop_words: &'a HashSet<Token>,
    extra_stop_words: &'a [&'a str],
}

impl<'a> StopWordFilter<'a> {
    pub fn new(stop_words: &'a HashSet<Token>, extra_stop_words: &'a [&'a str]) -> Self {
        StopWordFilter {
            stop_words,
            extra_stop_words,
        }
    }

    /// Whether the token carries no content.
    pub fn is_noise(&self, token: &TokenRef) -> bool {
        token.chars().count() <= 1
            || self.stop_words.contains(token)
            || self.extra_stop_words.contains(&token)
    }

    /// Splits on whitespace, lowercases and keeps only the content tokens.
    pub fn filter(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .map(|token| token.to_lowercase())
            .filter(|token| !self.is_noise(token))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_stop_words_and_single_letters() {
        let stop_words: HashSet<Token> = ["the", "with"].iter().map(|w| w.to_string()).collect();
        let filter = StopWordFilter::new(&stop_words, &["dont"]);

        assert_eq!(
            filter.filter("The hero x fights WITH a sword dont"),
            vec!["hero", "fights", "sword"]
        );
    }
}
