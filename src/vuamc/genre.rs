//! Genre inference from file-identifier prefixes
//!
//! Each file in the corpus is sampled from one of four registers. The first
//! three characters of the file identifier determine the register through a
//! fixed reference table; the table lives in `genre_prefixes.yaml` next to
//! this module and is deserialized once per process.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The register a corpus file was sampled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Genre {
    News,
    Conversation,
    Academic,
    Fiction,
    Unknown,
}

impl Genre {
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::News => "News",
            Genre::Conversation => "Conversation",
            Genre::Academic => "Academic",
            Genre::Fiction => "Fiction",
            Genre::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of the embedded prefix table.
#[derive(Debug, Deserialize)]
struct PrefixTable {
    news: Vec<String>,
    conversation: Vec<String>,
    academic: Vec<String>,
    fiction: Vec<String>,
}

static PREFIX_TO_GENRE: Lazy<HashMap<String, Genre>> = Lazy::new(|| {
    let table: PrefixTable = serde_yaml::from_str(include_str!("genre_prefixes.yaml"))
        .expect("embedded genre prefix table is well-formed");
    let mut map = HashMap::new();
    for (prefixes, genre) in [
        (table.news, Genre::News),
        (table.conversation, Genre::Conversation),
        (table.academic, Genre::Academic),
        (table.fiction, Genre::Fiction),
    ] {
        for prefix in prefixes {
            map.insert(prefix, genre);
        }
    }
    map
});

/// Map a file identifier to its genre, falling back to [`Genre::Unknown`].
pub fn infer_genre(file_id: &str) -> Genre {
    let prefix: String = file_id.chars().take(3).flat_map(char::to_lowercase).collect();
    PREFIX_TO_GENRE.get(&prefix).copied().unwrap_or(Genre::Unknown)
}
