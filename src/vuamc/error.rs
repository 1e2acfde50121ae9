//! Crate-wide error type for corpus conversion

use std::fmt;
use std::path::PathBuf;

/// Errors raised while locating, parsing, or serializing a corpus.
///
/// A structurally invalid document (`Xml`) is the only failure the core
/// itself can produce; the remaining variants come from the I/O edges.
#[derive(Debug)]
pub enum CorpusError {
    Io(std::io::Error),
    Xml(roxmltree::Error),
    Archive(zip::result::ZipError),
    Csv(csv::Error),
    Json(serde_json::Error),
    InputNotFound(PathBuf),
    NoDocument(PathBuf),
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::Io(e) => write!(f, "I/O error: {}", e),
            CorpusError::Xml(e) => write!(f, "Invalid corpus document: {}", e),
            CorpusError::Archive(e) => write!(f, "Archive error: {}", e),
            CorpusError::Csv(e) => write!(f, "Table serialization failed: {}", e),
            CorpusError::Json(e) => write!(f, "Manifest serialization failed: {}", e),
            CorpusError::InputNotFound(path) => {
                write!(f, "Input not found at {}", path.display())
            }
            CorpusError::NoDocument(path) => {
                write!(f, "No corpus document found in {}", path.display())
            }
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CorpusError::Io(e) => Some(e),
            CorpusError::Xml(e) => Some(e),
            CorpusError::Archive(e) => Some(e),
            CorpusError::Csv(e) => Some(e),
            CorpusError::Json(e) => Some(e),
            CorpusError::InputNotFound(_) | CorpusError::NoDocument(_) => None,
        }
    }
}

impl From<std::io::Error> for CorpusError {
    fn from(e: std::io::Error) -> Self {
        CorpusError::Io(e)
    }
}

impl From<roxmltree::Error> for CorpusError {
    fn from(e: roxmltree::Error) -> Self {
        CorpusError::Xml(e)
    }
}

impl From<zip::result::ZipError> for CorpusError {
    fn from(e: zip::result::ZipError) -> Self {
        CorpusError::Archive(e)
    }
}

impl From<csv::Error> for CorpusError {
    fn from(e: csv::Error) -> Self {
        CorpusError::Csv(e)
    }
}

impl From<serde_json::Error> for CorpusError {
    fn from(e: serde_json::Error) -> Self {
        CorpusError::Json(e)
    }
}
