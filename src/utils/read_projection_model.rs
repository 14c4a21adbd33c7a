use crate::types::TermId;
use crate::utils::{parse_vector_components, tsv_reader};
use crate::{Error, LsaProjection};
use std::collections::HashMap;

/// Reads a projection model from TSV content.
///
/// The header names the `term_id` column followed by one column per semantic dimension; each
/// row holds the projection row of one term.
pub fn read_projection_model_from_string(tsv: &str) -> Result<LsaProjection, Error> {
    let mut reader = tsv_reader(tsv);

    let dimension = reader.headers()?.len().saturating_sub(1);
    let mut rows: HashMap<TermId, Vec<f64>> = HashMap::new();

    for record in reader.records() {
        let record = record?;

        let term_id = record
            .get(0)
            .and_then(|field| field.parse::<TermId>().ok())
            .ok_or_else(|| {
                Error::ArtifactError(format!(
                    "Missing or invalid term ID on line {}",
                    record.position().map_or(0, |position| position.line())
                ))
            })?;

        let row = parse_vector_components(&record, 1)?;

        if rows.insert(term_id, row).is_some() {
            return Err(Error::ArtifactError(format!(
                "Duplicate term ID {} in projection model",
                term_id
            )));
        }
    }

    LsaProjection::new(dimension, rows)
}
