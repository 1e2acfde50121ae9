//! Table serialization, checksums, and the run manifest
//!
//! The CSV column set and order come from the serde renames on
//! [`TokenRecord`], so the header row is fixed by the type. Downstream
//! consumers verify the table by checksum; both digests of the written file
//! are reported after every run.

use std::fs;
use std::path::Path;

use md5::Md5;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::vuamc::error::CorpusError;
use crate::vuamc::record::TokenRecord;

/// Write the ordered table as CSV with a header row.
pub fn write_csv(records: &[TokenRecord], path: &Path) -> Result<(), CorpusError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Hex digests of a written output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checksums {
    pub md5: String,
    pub sha256: String,
}

/// Compute both digests of a file.
pub fn file_checksums(path: &Path) -> Result<Checksums, CorpusError> {
    let bytes = fs::read(path)?;
    Ok(Checksums {
        md5: format!("{:x}", Md5::digest(&bytes)),
        sha256: format!("{:x}", Sha256::digest(&bytes)),
    })
}

/// Summary of one conversion run, for downstream log compatibility.
#[derive(Debug, Clone, Serialize)]
pub struct RunManifest {
    pub output: String,
    pub rows: usize,
    pub md5: String,
    pub sha256: String,
}

/// Serialize the manifest as pretty JSON next to the table.
pub fn write_manifest(manifest: &RunManifest, path: &Path) -> Result<(), CorpusError> {
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(path, json)?;
    Ok(())
}
