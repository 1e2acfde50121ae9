//! Token-level extraction: one `w` node to a candidate record
//!
//! A token node carries its surface text plus `lemma`, `type` (POS),
//! `subtype`, `xml:id` and `corresp` attributes. Metaphor annotations sit on
//! `seg` children with a `function` attribute; a `seg` may also carry its own
//! surface text and its own identifiers, which take precedence over the
//! token's. All functions here are pure over the document tree.

use roxmltree::Node;

use crate::vuamc::genre::Genre;
use crate::vuamc::options::ParseOptions;
use crate::vuamc::record::{merge_pipe, normalize_id, strip_ref_marker, TokenRecord};

/// Namespace of all corpus elements.
pub const TEI_NS: &str = "http://www.tei-c.org/ns/1.0";
/// The reserved `xml:` attribute namespace.
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// POS tag the corpus uses for punctuation tokens.
pub const PUNCTUATION_POS: &str = "PUN";

/// Annotation functions of interest on `seg` children.
const FUNC_MRW: &str = "mrw";
const FUNC_MFLAG: &str = "mFlag";
const FUNC_TRUNC: &str = "trunc";

/// Extract a record from one token node, or decide to skip it.
///
/// Skips: a truncation annotation anywhere beneath the token, or the
/// punctuation POS tag (both subject to [`ParseOptions`]).
pub fn extract_token(
    w: Node,
    file_id: &str,
    sentence_id: &str,
    genre: Genre,
    options: &ParseOptions,
) -> Option<TokenRecord> {
    if options.exclude_truncation && has_truncation(w) {
        return None;
    }

    let lemma = attr(w, "lemma");
    let pos = attr(w, "type");
    if options.exclude_punctuation && pos == PUNCTUATION_POS {
        return None;
    }

    let mut word = w.text().unwrap_or("").trim().to_string();
    let mut metaphor = "";
    let mut mflag = "";
    let mut mrw_type = String::new();
    let mut subtype = attr(w, "subtype").to_string();
    // Both annotation functions feed one override slot; the first seg with
    // non-empty own text wins and is never replaced.
    let mut override_text: Option<String> = None;
    let mut seg_anchor_id = "";
    let mut seg_corresp = "";

    for seg in w.children().filter(|c| c.has_tag_name((TEI_NS, "seg"))) {
        match attr(seg, "function") {
            FUNC_MRW => {
                metaphor = "mrw";
                mrw_type = merge_pipe(&mrw_type, attr(seg, "type"));
                subtype = merge_pipe(&subtype, attr(seg, "subtype"));
                take_override(&mut override_text, seg);
                if seg_anchor_id.is_empty() {
                    seg_anchor_id = attr_ns(seg, XML_NS, "id");
                }
                if seg_corresp.is_empty() {
                    seg_corresp = strip_ref_marker(seg.attribute("corresp").unwrap_or("")).trim();
                }
            }
            FUNC_MFLAG => {
                mflag = "mFlag";
                mrw_type = merge_pipe(&mrw_type, attr(seg, "type"));
                subtype = merge_pipe(&subtype, attr(seg, "subtype"));
                take_override(&mut override_text, seg);
            }
            _ => {}
        }
    }

    if let Some(text) = override_text {
        word = text;
    }

    // Identifiers on the annotation outrank the token's own.
    let w_id = attr_ns(w, XML_NS, "id");
    let w_corresp = strip_ref_marker(w.attribute("corresp").unwrap_or("")).trim();
    let xml_id = normalize_id(if seg_anchor_id.is_empty() { w_id } else { seg_anchor_id });
    let corresp = normalize_id(if seg_corresp.is_empty() { w_corresp } else { seg_corresp });

    Some(TokenRecord {
        file_id: file_id.to_string(),
        genre,
        sentence_id: sentence_id.to_string(),
        word,
        lemma: lemma.to_string(),
        pos: pos.to_string(),
        metaphor: metaphor.to_string(),
        mrw_type,
        subtype,
        mflag: mflag.to_string(),
        xml_id,
        corresp,
    })
}

/// True when any `seg` below the token, at any depth, marks a truncation.
fn has_truncation(w: Node) -> bool {
    w.descendants()
        .any(|n| n.has_tag_name((TEI_NS, "seg")) && n.attribute("function") == Some(FUNC_TRUNC))
}

fn take_override(slot: &mut Option<String>, seg: Node) {
    if slot.is_some() {
        return;
    }
    if let Some(text) = seg.text() {
        let text = text.trim();
        if !text.is_empty() {
            *slot = Some(text.to_string());
        }
    }
}

fn attr<'a>(node: Node<'a, '_>, name: &str) -> &'a str {
    node.attribute(name).unwrap_or("").trim()
}

fn attr_ns<'a>(node: Node<'a, '_>, namespace: &str, name: &str) -> &'a str {
    node.attribute((namespace, name)).unwrap_or("").trim()
}
