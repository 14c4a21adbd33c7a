use crate::utils::{parse_vector_components, tsv_reader};
use crate::{Corpus, CorpusDocument, Error, SemanticVector};
use log::debug;

/// Reads a corpus from TSV content.
///
/// The header names the `external_id` and `title` columns followed by one column per dimension
/// of the projected space. Vectors are stored as projected, so dimension 0 is dropped here the
/// same way it is dropped for folded queries.
///
/// Rows without vector components are placeholders for unused external IDs and are skipped.
pub fn read_corpus_from_string(tsv: &str) -> Result<Corpus, Error> {
    let mut reader = tsv_reader(tsv);

    let projected_dimension = reader.headers()?.len().saturating_sub(2);
    let mut documents = Vec::new();

    for record in reader.records() {
        let record = record?;

        let external_id = match record.get(0) {
            Some(external_id) if !external_id.is_empty() => external_id.to_string(),
            _ => {
                return Err(Error::ArtifactError(format!(
                    "Missing external ID on line {}",
                    record.position().map_or(0, |position| position.line())
                )))
            }
        };

        if record.iter().skip(2).all(|field| field.is_empty()) {
            debug!("Skipping placeholder corpus row for ID {}", external_id);
            continue;
        }

        let components = parse_vector_components(&record, 2)?;
        if components.len() != projected_dimension {
            return Err(Error::DimensionMismatch {
                expected: projected_dimension,
                found: components.len(),
            });
        }

        let title = record
            .get(1)
            .filter(|title| !title.is_empty())
            .map(|title| title.to_string());

        documents.push(CorpusDocument {
            external_id,
            title,
            vector: SemanticVector::from_projection(components),
        });
    }

    Corpus::new(documents)
}
