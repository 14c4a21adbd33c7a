use crate::types::Token;

const LEADING_PUNCTUATION: &[char] = &['(', '[', '{', '"', '\'', '`'];
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}', '"', '\''];

/// Splits text into word and punctuation tokens.
///
/// Punctuation at the start or end of a whitespace-delimited chunk becomes a token of its own,
/// so sentence boundaries survive for the part-of-speech tagger. Punctuation inside a chunk
/// (e.g. `x-ray`, `1.5`) is left alone.
pub fn word_tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for chunk in text.split_whitespace() {
        let word_start = chunk
            .find(|c: char| !LEADING_PUNCTUATION.contains(&c))
            .unwrap_or(chunk.len());

        tokens.extend(chunk[..word_start].chars().map(|c| c.to_string()));

        let rest = &chunk[word_start..];
        let word = rest.trim_end_matches(TRAILING_PUNCTUATION);

        if !word.is_empty() {
            tokens.push(word.to_string());
        }

        tokens.extend(rest[word.len()..].chars().map(|c| c.to_string()));
    }

    tokens
}
