//! The flat per-token output record and its field algebra
//!
//! A [`TokenRecord`] is one row of the final table. During sentence-level
//! merging a record is exactly one of three kinds:
//!
//! - Anchor: `xml_id` set, `corresp` empty. Holds the canonical identifier
//!   of a multi-word group.
//! - Part: `corresp` set. Contributes surface material to the group named
//!   by `corresp`.
//! - Plain: both empty. An ordinary single token.
//!
//! The helpers in this module are pure string functions shared by the
//! extractor and the merger: pipe-list union and identifier normalization.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;

use crate::vuamc::genre::Genre;

/// Matches an identifier with an optional trailing segmentation suffix.
/// The root is non-empty, so a bare suffix like "s2" is left alone.
static SEG_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)(?:s\d+)?$").expect("segmentation suffix pattern"));

/// One row of the output table.
///
/// Serde renames pin the serialized column names, so the CSV header matches
/// the downstream consumers of the table byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    #[serde(rename = "File_ID")]
    pub file_id: String,
    #[serde(rename = "Genre")]
    pub genre: Genre,
    #[serde(rename = "Sentence_ID")]
    pub sentence_id: String,
    #[serde(rename = "Original_Word")]
    pub word: String,
    #[serde(rename = "Lemma")]
    pub lemma: String,
    #[serde(rename = "POS")]
    pub pos: String,
    #[serde(rename = "Metaphor")]
    pub metaphor: String,
    #[serde(rename = "Type")]
    pub mrw_type: String,
    #[serde(rename = "Subtype")]
    pub subtype: String,
    #[serde(rename = "MFlag")]
    pub mflag: String,
    #[serde(rename = "xml:id")]
    pub xml_id: String,
    #[serde(rename = "corresp")]
    pub corresp: String,
}

impl TokenRecord {
    /// An anchor carries the group identifier and no part reference.
    pub fn is_anchor(&self) -> bool {
        !self.xml_id.is_empty() && self.corresp.is_empty()
    }

    /// A part references its group through `corresp`.
    pub fn is_part(&self) -> bool {
        !self.corresp.is_empty()
    }
}

/// Union of two pipe-delimited tag lists.
///
/// Duplicates are dropped case-insensitively while the first-seen spelling
/// and order are preserved. Empty segments vanish.
pub fn merge_pipe(a: &str, b: &str) -> String {
    let mut items: Vec<&str> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for list in [a, b] {
        for tag in list.split('|') {
            let tag = tag.trim();
            if tag.is_empty() {
                continue;
            }
            if seen.insert(tag.to_lowercase()) {
                items.push(tag);
            }
        }
    }
    items.join("|")
}

/// Strip one trailing segmentation suffix of the form `s<digits>` so that
/// all segments of a split token share a root identifier ("w44s2" → "w44").
pub fn normalize_id(id: &str) -> String {
    if id.is_empty() {
        return String::new();
    }
    match SEG_SUFFIX.captures(id) {
        Some(captures) => captures[1].to_string(),
        None => id.to_string(),
    }
}

/// Drop the leading reference marker(s) from a `corresp` value ("#w44" → "w44").
pub fn strip_ref_marker(value: &str) -> &str {
    value.trim_start_matches('#')
}
