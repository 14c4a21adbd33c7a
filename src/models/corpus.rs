use crate::types::{CorpusPosition, ExternalId, ExternalIdRef};
use crate::{Error, RankedList, SemanticVector};
use std::collections::HashMap;

/// Characters reserved by the ranked list wire format.
const RESERVED_ID_CHARACTERS: &[char] = &[',', '&'];

#[derive(Debug, Clone, PartialEq)]
pub struct CorpusDocument {
    pub external_id: ExternalId,
    pub title: Option<String>,
    pub vector: SemanticVector,
}

/// The fixed set of reference games.
///
/// Documents are stored densely; external IDs may be sparse, so positions and external IDs are
/// related through an explicit index map in both directions. Gaps in the external ID range simply
/// have no position and can never be ranked.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<CorpusDocument>,
    position_map: HashMap<ExternalId, CorpusPosition>,
    dimension: usize,
}

impl Corpus {
    /// # Errors
    /// Fails on duplicate or reserved-character external IDs, and on vectors of unequal
    /// dimension.
    pub fn new(documents: Vec<CorpusDocument>) -> Result<Self, Error> {
        let dimension = documents
            .first()
            .map_or(0, |document| document.vector.dimension());
        let mut position_map = HashMap::with_capacity(documents.len());

        for (position, document) in documents.iter().enumerate() {
            if document.external_id.is_empty()
                || document.external_id.contains(RESERVED_ID_CHARACTERS)
            {
                return Err(Error::ArtifactError(format!(
                    "Invalid external ID '{}'",
                    document.external_id
                )));
            }

            if document.vector.dimension() != dimension {
                return Err(Error::DimensionMismatch {
                    expected: dimension,
                    found: document.vector.dimension(),
                });
            }

            if position_map
                .insert(document.external_id.clone(), position)
                .is_some()
            {
                return Err(Error::ArtifactError(format!(
                    "Duplicate external ID '{}' in corpus",
                    document.external_id
                )));
            }
        }

        Ok(Corpus {
            documents,
            position_map,
            dimension,
        })
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Dimension of every document vector (N - 1), or 0 for an empty corpus.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn documents(&self) -> &[CorpusDocument] {
        &self.documents
    }

    pub fn position_of(&self, external_id: &ExternalIdRef) -> Option<CorpusPosition> {
        self.position_map.get(external_id).copied()
    }

    pub fn external_id_at(&self, position: CorpusPosition) -> Option<&ExternalIdRef> {
        self.documents
            .get(position)
            .map(|document| document.external_id.as_str())
    }

    pub fn document(&self, external_id: &ExternalIdRef) -> Result<&CorpusDocument, Error> {
        self.position_of(external_id)
            .map(|position| &self.documents[position])
            .ok_or_else(|| Error::UnknownExternalId(external_id.to_string()))
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> + '_ {
        self.documents
            .iter()
            .filter_map(|document| document.title.as_deref())
    }

    /// Case-insensitive exact title lookup; the first matching document wins.
    pub fn find_by_title(&self, title: &str) -> Option<&CorpusDocument> {
        let title = title.trim().to_lowercase();

        self.documents.iter().find(|document| {
            document
                .title
                .as_deref()
                .map_or(false, |document_title| document_title.to_lowercase() == title)
        })
    }

    /// Resolves every entry of a ranked list back to its corpus document, in list order.
    ///
    /// # Errors
    /// Fails with `UnknownExternalId` on the first entry not in the corpus.
    pub fn resolve(&self, ranked_list: &RankedList) -> Result<Vec<&CorpusDocument>, Error> {
        ranked_list
            .iter()
            .map(|entry| self.document(&entry.external_id))
            .collect()
    }
}
