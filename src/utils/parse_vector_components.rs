use crate::Error;
use csv::StringRecord;

/// Parses the fields of `record` from `start` onwards as vector components.
pub fn parse_vector_components(record: &StringRecord, start: usize) -> Result<Vec<f64>, Error> {
    record
        .iter()
        .skip(start)
        .map(|field| {
            field.parse::<f64>().map_err(|_| {
                Error::ArtifactError(format!(
                    "Invalid vector component '{}' on line {}",
                    field,
                    record.position().map_or(0, |position| position.line())
                ))
            })
        })
        .collect()
}
