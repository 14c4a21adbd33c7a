use crate::types::TermId;
use crate::utils::tsv_reader;
use crate::{Error, TfIdfModel};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct WeightingModelRecord {
    term_id: TermId,
    idf: f64,
}

/// Reads a TF-IDF weighting model from TSV content with the columns `term_id` and `idf`.
///
/// The resulting model L2-normalizes its output.
pub fn read_weighting_model_from_string(tsv: &str) -> Result<TfIdfModel, Error> {
    let mut reader = tsv_reader(tsv);
    let mut idfs = HashMap::new();

    for record in reader.deserialize() {
        let record: WeightingModelRecord = record?;

        if !record.idf.is_finite() {
            return Err(Error::ArtifactError(format!(
                "Non-finite IDF for term ID {}",
                record.term_id
            )));
        }

        if idfs.insert(record.term_id, record.idf).is_some() {
            return Err(Error::ArtifactError(format!(
                "Duplicate term ID {} in weighting model",
                record.term_id
            )));
        }
    }

    Ok(TfIdfModel::new(idfs, true))
}
