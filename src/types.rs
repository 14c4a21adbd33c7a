// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units used for processing text.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// A unique identifier for a term of the `TermDictionary`. Term IDs index the rows of the
/// projection model.
pub type TermId = usize;

/// A sparse vector keyed by term ID, sorted by ascending term ID.
///
/// Used both for raw term counts and for weighted term vectors.
pub type SparseVector = Vec<(TermId, f64)>;

/// The stable, external identifier of a corpus document (a game). External IDs may be sparse
/// (have gaps), so they are never used as positions.
pub type ExternalId = String;

/// Represents a borrowed view of an `ExternalId`.
pub type ExternalIdRef = str;

/// The internal position of a document within a `Corpus`.
pub type CorpusPosition = usize;

/// A cosine similarity score in `[-1, 1]`.
pub type Score = f64;

/// A Penn Treebank style part-of-speech tag (e.g. `NN`, `VBD`).
pub type PosTag = String;

/// A token paired with its part-of-speech tag.
pub type TaggedToken = (Token, PosTag);
