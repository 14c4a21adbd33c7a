use crate::constants::{
    ADJECTIVE_SUFFIXES, CLOSED_CLASS_TAGS, IRREGULAR_VERBS, PARTICIPLE_AUXILIARIES,
};
use crate::types::{TaggedToken, Token, TokenRef};
use std::collections::{HashMap, HashSet};

/// Assigns Penn Treebank style tags to a tokenized text.
pub trait PosTagger: Send + Sync {
    fn tag(&self, tokens: &[Token]) -> Vec<TaggedToken>;
}

/// A lexicon and suffix based tagger.
///
/// Good enough to separate verbs and common nouns from everything else, which is all the
/// gameplay pipeline keeps.
#[derive(Debug, Clone)]
pub struct HeuristicPosTagger {
    closed_class_tags: HashMap<&'static str, &'static str>,
    irregular_verb_forms: HashSet<&'static str>,
}

impl Default for HeuristicPosTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicPosTagger {
    pub fn new() -> Self {
        HeuristicPosTagger {
            closed_class_tags: CLOSED_CLASS_TAGS.iter().copied().collect(),
            irregular_verb_forms: IRREGULAR_VERBS.iter().map(|(form, _)| *form).collect(),
        }
    }

    fn tag_token(
        &self,
        token: &TokenRef,
        previous_token: Option<&TokenRef>,
        previous_tag: Option<&str>,
    ) -> &'static str {
        let word = token.to_lowercase();

        if let Some(&tag) = self.closed_class_tags.get(word.as_str()) {
            return tag;
        }

        if token.chars().all(|c| c.is_ascii_punctuation()) {
            return match token {
                "." | "!" | "?" => ".",
                "," => ",",
                ";" | ":" => ":",
                _ => "SYM",
            };
        }

        if token.chars().any(|c| c.is_ascii_digit())
            && token
                .chars()
                .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            return "CD";
        }

        let is_sentence_initial = previous_tag.map_or(true, |tag| tag == ".");
        if !is_sentence_initial && token.chars().next().map_or(false, char::is_uppercase) {
            return if word.ends_with('s') { "NNPS" } else { "NNP" };
        }

        let follows_auxiliary = previous_token.map_or(false, |previous_token| {
            PARTICIPLE_AUXILIARIES.contains(&previous_token.to_lowercase().as_str())
        });

        if self.irregular_verb_forms.contains(word.as_str()) {
            return if follows_auxiliary { "VBN" } else { "VBD" };
        }

        if matches!(previous_tag, Some("TO") | Some("MD")) {
            return "VB";
        }

        if word.len() > 4 && word.ends_with("ing") {
            return "VBG";
        }

        if word.len() > 3 && word.ends_with("ed") {
            return if follows_auxiliary { "VBN" } else { "VBD" };
        }

        if word.len() > 4 && word.ends_with("ly") {
            return "RB";
        }

        if ADJECTIVE_SUFFIXES
            .iter()
            .any(|suffix| word.len() >= suffix.len() + 3 && word.ends_with(suffix))
        {
            return "JJ";
        }

        if word.len() > 3
            && word.ends_with('s')
            && !(word.ends_with("ss") || word.ends_with("us") || word.ends_with("is"))
        {
            return match previous_tag {
                Some("PRP") | Some("NN") | Some("NNP") | Some("NNS") => "VBZ",
                _ => "NNS",
            };
        }

        match previous_tag {
            Some("PRP") => "VBP",
            _ => "NN",
        }
    }
}

impl PosTagger for HeuristicPosTagger {
    fn tag(&self, tokens: &[Token]) -> Vec<TaggedToken> {
        let mut tagged: Vec<TaggedToken> = Vec::with_capacity(tokens.len());

        for (index, token) in tokens.iter().enumerate() {
            let previous_token = index.checked_sub(1).map(|previous| tokens[previous].as_str());
            let previous_tag = tagged.last().map(|(_, tag)| tag.as_str());

            let tag = self.tag_token(token, previous_token, previous_tag);
            tagged.push((token.clone(), tag.to_string()));
        }

        tagged
    }
}
