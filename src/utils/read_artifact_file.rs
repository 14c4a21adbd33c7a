use crate::constants::GZIP_FILE_EXTENSION;
use crate::Error;
use flate2::read::GzDecoder;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Reads an artifact file into a string, decompressing it first if it is Gzip compressed
/// (`.gz` extension).
pub fn read_artifact_file(path: &Path) -> Result<String, Error> {
    let read_bytes = fs::read(path)?;

    if path
        .extension()
        .map_or(false, |extension| extension == GZIP_FILE_EXTENSION)
    {
        let mut decoder = GzDecoder::new(read_bytes.as_slice());
        let mut decompressed_data = String::new();
        decoder.read_to_string(&mut decompressed_data)?;

        return Ok(decompressed_data);
    }

    String::from_utf8(read_bytes).map_err(|e| {
        Error::ArtifactError(format!("{} is not valid UTF-8: {}", path.display(), e))
    })
}
