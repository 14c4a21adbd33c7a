use crate::types::{ExternalId, ExternalIdRef, Score};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ENTRY_SEPARATOR: char = ',';
const SCORE_SEPARATOR: char = '&';

/// A corpus game and its cosine similarity to a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub external_id: ExternalId,
    pub score: Score,
}

impl RankedEntry {
    pub fn new(external_id: &ExternalIdRef, score: Score) -> Self {
        RankedEntry {
            external_id: external_id.to_string(),
            score,
        }
    }
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.external_id, SCORE_SEPARATOR, self.score)
    }
}

impl FromStr for RankedEntry {
    type Err = Error;

    fn from_str(entry: &str) -> Result<Self, Self::Err> {
        let mut parts = entry.split(SCORE_SEPARATOR);

        let (external_id, score) = match (parts.next(), parts.next(), parts.next()) {
            (Some(external_id), Some(score), None) => (external_id, score),
            _ => {
                return Err(Error::FormatError(format!(
                    "Expected `id{}score`, found '{}'",
                    SCORE_SEPARATOR, entry
                )))
            }
        };

        if external_id.is_empty() {
            return Err(Error::FormatError(format!(
                "Missing external ID in '{}'",
                entry
            )));
        }

        let score = score
            .parse::<Score>()
            .ok()
            .filter(|score| score.is_finite())
            .ok_or_else(|| Error::FormatError(format!("Invalid score in '{}'", entry)))?;

        Ok(RankedEntry::new(external_id, score))
    }
}

/// An ordered list of ranked entries, with the comma-joined `id&score` wire format used to hand
/// results to the presentation layer and to read them back for redisplay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedList(Vec<RankedEntry>);

impl RankedList {
    pub fn new(entries: Vec<RankedEntry>) -> Self {
        RankedList(entries)
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.0.iter()
    }

    pub fn contains_id(&self, external_id: &ExternalIdRef) -> bool {
        self.0.iter().any(|entry| entry.external_id == external_id)
    }
}

impl From<Vec<RankedEntry>> for RankedList {
    fn from(entries: Vec<RankedEntry>) -> Self {
        RankedList::new(entries)
    }
}

impl<'a> IntoIterator for &'a RankedList {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for RankedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, "{}", ENTRY_SEPARATOR)?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

/// Parses the wire format. Any malformed entry fails the whole list.
impl FromStr for RankedList {
    type Err = Error;

    fn from_str(serialized: &str) -> Result<Self, Self::Err> {
        if serialized.is_empty() {
            return Ok(RankedList::default());
        }

        let entries = serialized
            .split(ENTRY_SEPARATOR)
            .map(RankedEntry::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RankedList(entries))
    }
}
