use crate::constants::{
    ADJECTIVE_DETACHMENT_RULES, IRREGULAR_ADJECTIVES, IRREGULAR_NOUNS, IRREGULAR_VERBS,
    NOUN_DETACHMENT_RULES, PENN_TAG_WORD_CLASSES, VERB_DETACHMENT_RULES,
};
use crate::types::{Token, TokenRef};
use std::collections::HashSet;

/// The coarse part of speech a lemma is looked up under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl WordClass {
    /// Lookup order when no word class is known.
    pub const ALL: [WordClass; 4] = [
        WordClass::Noun,
        WordClass::Verb,
        WordClass::Adjective,
        WordClass::Adverb,
    ];

    /// Maps a Penn Treebank tag to its word class, if it has one.
    pub fn from_penn_tag(tag: &str) -> Option<WordClass> {
        PENN_TAG_WORD_CLASSES
            .iter()
            .find(|(penn_tag, _)| *penn_tag == tag)
            .map(|(_, word_class)| *word_class)
    }

    fn exceptions(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            WordClass::Noun => IRREGULAR_NOUNS,
            WordClass::Verb => IRREGULAR_VERBS,
            WordClass::Adjective => IRREGULAR_ADJECTIVES,
            WordClass::Adverb => &[],
        }
    }

    fn detachment_rules(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            WordClass::Noun => NOUN_DETACHMENT_RULES,
            WordClass::Verb => VERB_DETACHMENT_RULES,
            WordClass::Adjective => ADJECTIVE_DETACHMENT_RULES,
            WordClass::Adverb => &[],
        }
    }
}

/// Reduces a token to its lemma.
pub trait Lemmatizer: Send + Sync {
    /// Returns the lemma of `token`, or the token itself when no reduction applies.
    ///
    /// `None` means the word class is unknown and every class may be tried.
    fn lemmatize(&self, token: &TokenRef, word_class: Option<WordClass>) -> Token;
}

/// Dictionary-validated suffix detachment, in the manner of WordNet's morphy.
///
/// For each candidate word class, irregular forms are checked first, then the word itself, then
/// the suffix detachment candidates that are known lexicon words (the shortest one wins). Words
/// with no lexicon reading at all go through conservative noun and verb suffix stripping.
#[derive(Debug, Clone, Default)]
pub struct RuleLemmatizer {
    lexicon: HashSet<Token>,
}

impl RuleLemmatizer {
    /// Creates a lemmatizer with an empty lexicon, relying on irregular forms and suffix
    /// stripping alone.
    pub fn new() -> Self {
        RuleLemmatizer {
            lexicon: HashSet::new(),
        }
    }

    pub fn with_lexicon<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<TokenRef>,
    {
        RuleLemmatizer {
            lexicon: words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    fn lookup(&self, word: &TokenRef, word_class: WordClass) -> Option<Token> {
        if let Some((_, lemma)) = word_class
            .exceptions()
            .iter()
            .find(|(form, _)| *form == word)
        {
            return Some(lemma.to_string());
        }

        if self.lexicon.contains(word) {
            return Some(word.to_string());
        }

        word_class
            .detachment_rules()
            .iter()
            .filter_map(|(suffix, replacement)| {
                word.strip_suffix(suffix)
                    .filter(|stem| !stem.is_empty())
                    .map(|stem| format!("{}{}", stem, replacement))
            })
            .filter(|candidate| self.lexicon.contains(candidate))
            .min_by_key(|candidate| candidate.len())
    }
}

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize(&self, token: &TokenRef, word_class: Option<WordClass>) -> Token {
        let word_classes = match word_class {
            Some(word_class) => vec![word_class],
            None => WordClass::ALL.to_vec(),
        };

        for word_class in &word_classes {
            if let Some(lemma) = self.lookup(token, *word_class) {
                return lemma;
            }
        }

        for word_class in &word_classes {
            let stripped = match word_class {
                WordClass::Noun => strip_noun_suffix(token),
                WordClass::Verb => strip_verb_suffix(token),
                _ => None,
            };

            if let Some(lemma) = stripped {
                return lemma;
            }
        }

        token.to_string()
    }
}

fn strip_noun_suffix(word: &str) -> Option<Token> {
    if !word.is_ascii()
        || word.len() < 4
        || word.ends_with("ss")
        || word.ends_with("us")
        || word.ends_with("is")
    {
        return None;
    }

    if let Some(stem) = word.strip_suffix("sses") {
        return Some(format!("{}ss", stem));
    }

    if let Some(stem) = word.strip_suffix("ies") {
        return Some(format!("{}y", stem));
    }

    if let Some(stem) = word.strip_suffix("es") {
        if ["x", "z", "ch", "sh"].iter().any(|ending| stem.ends_with(ending)) {
            return Some(stem.to_string());
        }
    }

    word.strip_suffix('s').map(|stem| stem.to_string())
}

fn strip_verb_suffix(word: &str) -> Option<Token> {
    if !word.is_ascii() || word.len() < 4 {
        return None;
    }

    if let Some(stem) = word.strip_suffix("ies") {
        return Some(format!("{}y", stem));
    }

    if let Some(stem) = word.strip_suffix("eed") {
        return (measure(stem) > 0).then(|| format!("{}ee", stem));
    }

    for suffix in ["ing", "ed"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            if !contains_vowel(stem) {
                return None;
            }
            return Some(restore_stem(stem));
        }
    }

    if let Some(stem) = word.strip_suffix("es") {
        if ["sh", "ch", "x", "z", "ss"]
            .iter()
            .any(|ending| stem.ends_with(ending))
        {
            return Some(stem.to_string());
        }
    }

    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return None;
    }

    word.strip_suffix('s').map(|stem| stem.to_string())
}

/// Repairs a stem left behind by `-ed`/`-ing` removal ("hopp" -> "hop", "hop" -> "hope").
fn restore_stem(stem: &str) -> Token {
    if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
        return format!("{}e", stem);
    }

    let bytes = stem.as_bytes();
    let consonants = consonant_mask(bytes);
    let length = bytes.len();

    if length >= 2
        && bytes[length - 1] == bytes[length - 2]
        && consonants[length - 1]
        && !matches!(bytes[length - 1], b'l' | b's' | b'z')
    {
        return stem[..length - 1].to_string();
    }

    if count_vowel_consonant_runs(&consonants) == 1 && ends_cvc(bytes, &consonants) {
        return format!("{}e", stem);
    }

    stem.to_string()
}

/// Marks each byte of `word` as consonant (`true`) or vowel.
///
/// A `y` is a consonant at the start of a word or after a vowel.
fn consonant_mask(word: &[u8]) -> Vec<bool> {
    let mut consonants: Vec<bool> = Vec::with_capacity(word.len());

    for (index, &byte) in word.iter().enumerate() {
        let is_consonant = match byte {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => index == 0 || !consonants[index - 1],
            _ => true,
        };
        consonants.push(is_consonant);
    }

    consonants
}

fn contains_vowel(stem: &str) -> bool {
    consonant_mask(stem.as_bytes())
        .iter()
        .any(|is_consonant| !is_consonant)
}

/// The number of vowel-consonant sequences in the stem.
fn measure(stem: &str) -> usize {
    count_vowel_consonant_runs(&consonant_mask(stem.as_bytes()))
}

fn count_vowel_consonant_runs(consonants: &[bool]) -> usize {
    consonants
        .windows(2)
        .filter(|pair| !pair[0] && pair[1])
        .count()
}

fn ends_cvc(word: &[u8], consonants: &[bool]) -> bool {
    let length = word.len();

    length >= 3
        && consonants[length - 3]
        && !consonants[length - 2]
        && consonants[length - 1]
        && !matches!(word[length - 1], b'w' | b'x' | b'y')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_class_from_penn_tag() {
        assert_eq!(WordClass::from_penn_tag("VBD"), Some(WordClass::Verb));
        assert_eq!(WordClass::from_penn_tag("NNS"), Some(WordClass::Noun));
        assert_eq!(WordClass::from_penn_tag("NNP"), None);
    }

    #[test]
    fn test_measure() {
        assert_eq!(measure("tr"), 0);
        assert_eq!(measure("tree"), 0);
        assert_eq!(measure("trouble"), 1);
        assert_eq!(measure("oaten"), 2);
    }

    #[test]
    fn test_consonant_mask() {
        assert_eq!(consonant_mask(b"toy"), vec![true, false, true]);
        assert_eq!(consonant_mask(b"yes"), vec![true, false, true]);
        assert_eq!(consonant_mask(b"syzygy"), vec![true, false, true, false, true, false]);
    }

    #[test]
    fn test_restore_stem() {
        assert_eq!(restore_stem("hopp"), "hop");
        assert_eq!(restore_stem("hop"), "hope");
        assert_eq!(restore_stem("fall"), "fall");
        assert_eq!(restore_stem("rot"), "rote");
        assert_eq!(restore_stem("fight"), "fight");
    }

    #[test]
    fn test_suffix_stripping_without_lexicon() {
        assert_eq!(strip_noun_suffix("games"), Some("game".to_string()));
        assert_eq!(strip_noun_suffix("boxes"), Some("box".to_string()));
        assert_eq!(strip_noun_suffix("classes"), Some("class".to_string()));
        assert_eq!(strip_noun_suffix("boss"), None);
        assert_eq!(strip_verb_suffix("enjoyed"), Some("enjoy".to_string()));
        assert_eq!(strip_verb_suffix("running"), Some("run".to_string()));
        assert_eq!(strip_verb_suffix("agreed"), Some("agree".to_string()));
        assert_eq!(strip_verb_suffix("string"), None);
    }
}
