use csv::{Reader, ReaderBuilder, Trim};
use std::io::Cursor;

/// Builds a reader for tab-separated artifact content with a header row.
///
/// Quoting is disabled since titles may legitimately contain quote characters, and rows may
/// differ in length (vector rows, placeholder rows).
pub fn tsv_reader(tsv: &str) -> Reader<Cursor<&str>> {
    ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(Cursor::new(tsv))
}
