use crate::types::ExternalId;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// A serialized ranked list which does not parse as `id&score` pairs.
    FormatError(String),
    /// An external ID which is not part of the corpus' ID table.
    UnknownExternalId(ExternalId),
    DimensionMismatch {
        expected: usize,
        found: usize,
    },
    ArtifactError(String),
    UnknownPipelineVariant(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FormatError(msg) => write!(f, "Format Error: {}", msg),
            Error::UnknownExternalId(id) => write!(f, "Unknown External ID: {}", id),
            Error::DimensionMismatch { expected, found } => write!(
                f,
                "Dimension Mismatch: expected {} dimensions, found {}",
                expected, found
            ),
            Error::ArtifactError(msg) => write!(f, "Artifact Error: {}", msg),
            Error::UnknownPipelineVariant(name) => {
                write!(f, "Unknown Pipeline Variant: {}", name)
            }
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ArtifactError(err.to_string())
    }
}
