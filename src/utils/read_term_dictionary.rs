use crate::types::TermId;
use crate::utils::tsv_reader;
use crate::{Error, TermDictionary};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TermDictionaryRecord {
    term_id: TermId,
    term: String,
}

/// Reads a term dictionary from TSV content with the columns `term_id` and `term`.
pub fn read_term_dictionary_from_string(tsv: &str) -> Result<TermDictionary, Error> {
    let mut reader = tsv_reader(tsv);
    let mut term_dictionary = TermDictionary::new();

    for record in reader.deserialize() {
        let record: TermDictionaryRecord = record?;
        term_dictionary.insert_term(&record.term, record.term_id)?;
    }

    Ok(term_dictionary)
}
