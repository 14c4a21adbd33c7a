use crate::types::{TermId, Token, TokenRef};
use crate::Error;
use std::collections::HashMap;

/// Immutable (once loaded) mapping from surface term to term ID.
#[derive(Debug, Clone, Default)]
pub struct TermDictionary {
    term_map: HashMap<Token, TermId>,
    next_id: TermId,
}

impl TermDictionary {
    /// Creates a new, empty TermDictionary
    pub fn new() -> Self {
        TermDictionary {
            term_map: HashMap::new(),
            next_id: 0,
        }
    }

    /// Builds a dictionary assigning sequential IDs to the given terms, in order.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<TokenRef>,
    {
        let mut term_dictionary = Self::new();
        for term in terms {
            term_dictionary.upsert_term(term.as_ref());
        }
        term_dictionary
    }

    /// Adds a term to the map if it doesn't exist, and returns its unique ID
    pub fn upsert_term(&mut self, term: &TokenRef) -> TermId {
        if let Some(&id) = self.term_map.get(term) {
            id
        } else {
            let id = self.next_id;
            self.term_map.insert(term.to_string(), id);
            self.next_id += 1;
            id
        }
    }

    /// Adds a term with an explicit ID, as stored in a dictionary artifact.
    ///
    /// # Errors
    /// Returns an error if the term is already present, or if `term_id` is the largest
    /// representable ID.
    pub fn insert_term(&mut self, term: &TokenRef, term_id: TermId) -> Result<(), Error> {
        if self.term_map.contains_key(term) {
            return Err(Error::ArtifactError(format!(
                "Duplicate term '{}' in term dictionary",
                term
            )));
        }

        let following_id = term_id.checked_add(1).ok_or_else(|| {
            Error::ArtifactError(format!("Term ID {} for '{}' is out of range", term_id, term))
        })?;

        self.term_map.insert(term.to_string(), term_id);
        self.next_id = self.next_id.max(following_id);

        Ok(())
    }

    /// Gets the ID for a term, or None if the term is not present
    pub fn get_term_id(&self, term: &TokenRef) -> Option<TermId> {
        self.term_map.get(term).copied()
    }

    /// Gets the total number of unique terms
    pub fn term_count(&self) -> usize {
        self.term_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.term_map.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = &TokenRef> + '_ {
        self.term_map.keys().map(|term| term.as_str())
    }
}
