//! Locating and loading the corpus document
//!
//! The corpus reaches users in several shapes: a bare XML file, the zip
//! archive it is distributed in, or a directory containing either. All three
//! resolve to the document text here; parsing happens elsewhere.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::vuamc::error::CorpusError;

/// Load the corpus document text from a file, archive, or directory.
///
/// Directories are scanned non-recursively; `.xml` files win over `.zip`
/// archives and ties break lexicographically, so a given directory always
/// resolves to the same document.
pub fn load_corpus(path: &Path) -> Result<String, CorpusError> {
    if !path.exists() {
        return Err(CorpusError::InputNotFound(path.to_path_buf()));
    }
    if path.is_dir() {
        let resolved = scan_directory(path)?;
        return load_corpus(&resolved);
    }
    if has_extension(path, "zip") {
        return read_archive(path);
    }
    Ok(fs::read_to_string(path)?)
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case(wanted))
}

fn scan_directory(dir: &Path) -> Result<PathBuf, CorpusError> {
    let mut documents = Vec::new();
    let mut archives = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if has_extension(&path, "xml") {
            documents.push(path);
        } else if has_extension(&path, "zip") {
            archives.push(path);
        }
    }
    documents.sort();
    archives.sort();
    documents
        .into_iter()
        .next()
        .or_else(|| archives.into_iter().next())
        .ok_or_else(|| CorpusError::NoDocument(dir.to_path_buf()))
}

/// Extract the first XML entry from a zip archive, in archive order.
fn read_archive(path: &Path) -> Result<String, CorpusError> {
    let file = fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.name().to_ascii_lowercase().ends_with(".xml") {
            let mut xml = String::new();
            entry.read_to_string(&mut xml)?;
            return Ok(xml);
        }
    }
    Err(CorpusError::NoDocument(path.to_path_buf()))
}
