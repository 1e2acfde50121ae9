//! Sentence-scoped merging of multi-word expressions
//!
//! A multi-word expression is split across several token nodes: one anchor
//! holding the group identifier and any number of parts referencing it via
//! `corresp`. Parts may precede their anchor and other tokens may sit in
//! between, so the merger keeps an arena of output slots addressed by
//! normalized identifier. The slot is allocated the first time an identifier
//! is seen, in output position, and later contributors are folded into it in
//! place. A merged group therefore sits at the position of its first sighting
//! and is never moved afterwards.

use std::collections::HashMap;

use roxmltree::Node;

use crate::vuamc::extract::extract_token;
use crate::vuamc::genre::Genre;
use crate::vuamc::options::ParseOptions;
use crate::vuamc::record::{merge_pipe, TokenRecord};

/// Merge the ordered token nodes of one sentence scope into output records.
pub fn merge_sentence<'a, 'input, I>(
    tokens: I,
    file_id: &str,
    genre: Genre,
    sentence_id: &str,
    options: &ParseOptions,
) -> Vec<TokenRecord>
where
    I: IntoIterator<Item = Node<'a, 'input>>,
    'input: 'a,
{
    let mut rows: Vec<TokenRecord> = Vec::new();
    let mut anchor_index: HashMap<String, usize> = HashMap::new();

    for w in tokens {
        let record = match extract_token(w, file_id, sentence_id, genre, options) {
            Some(record) => record,
            None => continue,
        };

        if record.is_anchor() {
            let id = record.xml_id.clone();
            match anchor_index.get(&id) {
                // A part got here first and left a placeholder; fold the
                // anchor into it and mark the slot resolved.
                Some(&slot) => {
                    promote(&mut rows[slot], &record);
                    rows[slot].xml_id = id;
                    rows[slot].corresp.clear();
                }
                None => {
                    anchor_index.insert(id, rows.len());
                    rows.push(record);
                }
            }
        } else if record.is_part() {
            let id = record.corresp.clone();
            match anchor_index.get(&id) {
                Some(&slot) => promote(&mut rows[slot], &record),
                // Forward reference: open a placeholder at this position,
                // keyed under the group identifier.
                None => {
                    let mut placeholder = record;
                    placeholder.xml_id = id.clone();
                    placeholder.corresp.clear();
                    anchor_index.insert(id, rows.len());
                    rows.push(placeholder);
                }
            }
        } else {
            rows.push(record);
        }
    }

    rows
}

/// Fold a later contributor into an existing slot.
///
/// Surfaces and lemmas join with a space in arrival order, POS tags join
/// with `+`, the metaphor and flag markers saturate, and the tag lists take
/// their duplicate-free union.
fn promote(target: &mut TokenRecord, part: &TokenRecord) {
    target.word = format!("{} {}", target.word, part.word).trim().to_string();
    if !part.lemma.is_empty() {
        target.lemma = format!("{} {}", target.lemma, part.lemma).trim().to_string();
    }
    if !part.pos.is_empty() {
        target.pos = if target.pos.is_empty() {
            part.pos.clone()
        } else {
            format!("{}+{}", target.pos, part.pos)
        };
    }
    if part.metaphor == "mrw" {
        target.metaphor = "mrw".to_string();
    }
    if part.mflag == "mFlag" {
        target.mflag = "mFlag".to_string();
    }
    target.mrw_type = merge_pipe(&target.mrw_type, &part.mrw_type);
    target.subtype = merge_pipe(&target.subtype, &part.subtype);
}
