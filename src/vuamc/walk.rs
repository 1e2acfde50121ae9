//! Corpus traversal: text units, sentence scoping, exception rules
//!
//! The walker visits every identified text unit in document order, hands
//! each sentence's tokens to the merger, and sweeps up tokens that sit
//! outside any sentence container into synthetic one-token scopes. One file
//! of the corpus is damaged and gets a literal allow-list of sentence
//! ordinals instead; everything else in it is dropped.

use roxmltree::{Document, Node};

use crate::vuamc::error::CorpusError;
use crate::vuamc::extract::{TEI_NS, XML_NS};
use crate::vuamc::filter;
use crate::vuamc::genre::infer_genre;
use crate::vuamc::merge::merge_sentence;
use crate::vuamc::options::ParseOptions;
use crate::vuamc::record::TokenRecord;

/// Identifier prefix of the damaged file.
const B1G_PREFIX: &str = "b1g";
/// Sentence ordinals processed for that file, as fixed reference data.
const B1G_ALLOWED_SINGLE: [u32; 3] = [1012, 1299, 1401];
const B1G_ALLOWED_RANGES: [(u32, u32); 2] = [(738, 765), (1485, 1584)];

/// Convert a whole corpus document into the ordered output table.
///
/// This is the crate's main entry point. The only fatal condition is a
/// structurally invalid document; everything else degrades to empty fields
/// or silently dropped nodes.
pub fn parse_corpus(xml: &str, options: &ParseOptions) -> Result<Vec<TokenRecord>, CorpusError> {
    let document = Document::parse(xml)?;
    let mut rows = Vec::new();

    for text in document.root_element().descendants().filter(is_text_unit) {
        let file_id = text.attribute((XML_NS, "id")).unwrap_or("");
        let genre = infer_genre(file_id);
        let b1g = is_b1g(file_id);

        for sentence in text.descendants().filter(|n| n.has_tag_name((TEI_NS, "s"))) {
            if b1g && !b1g_sentence_kept(sentence) {
                continue;
            }
            let sentence_id = format!("{}_s{}", file_id, sentence.attribute("n").unwrap_or(""));
            let tokens = sentence.descendants().filter(is_token);
            rows.extend(merge_sentence(tokens, file_id, genre, &sentence_id, options));
        }

        // Tokens outside any sentence go into one-token buckets with a
        // per-file running counter. The damaged file skips this entirely.
        if !b1g {
            let mut bucket = 0u32;
            for token in text
                .descendants()
                .filter(|&n| is_token(&n) && !inside_sentence(n))
            {
                bucket += 1;
                let sentence_id = format!("{}_nosent{:04}", file_id, bucket);
                rows.extend(merge_sentence(
                    std::iter::once(token),
                    file_id,
                    genre,
                    &sentence_id,
                    options,
                ));
            }
        }
    }

    filter::apply(&mut rows, options);
    Ok(rows)
}

fn is_text_unit(node: &Node) -> bool {
    node.has_tag_name((TEI_NS, "text")) && node.attribute((XML_NS, "id")).is_some()
}

fn is_token(node: &Node) -> bool {
    node.has_tag_name((TEI_NS, "w"))
}

fn inside_sentence(node: Node) -> bool {
    node.ancestors()
        .skip(1)
        .any(|a| a.has_tag_name((TEI_NS, "s")))
}

fn is_b1g(file_id: &str) -> bool {
    file_id
        .get(..B1G_PREFIX.len())
        .map_or(false, |p| p.eq_ignore_ascii_case(B1G_PREFIX))
}

/// A sentence in the damaged file survives only with a parseable ordinal
/// inside the allowed windows. No ordinal means not allowed.
fn b1g_sentence_kept(sentence: Node) -> bool {
    sentence
        .attribute("n")
        .and_then(|n| n.trim().parse::<u32>().ok())
        .map_or(false, b1g_sentence_allowed)
}

fn b1g_sentence_allowed(ordinal: u32) -> bool {
    B1G_ALLOWED_SINGLE.contains(&ordinal)
        || B1G_ALLOWED_RANGES
            .iter()
            .any(|&(lo, hi)| (lo..=hi).contains(&ordinal))
}
