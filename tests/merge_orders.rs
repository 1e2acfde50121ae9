//! Property-based tests for arrival-order tolerance of MWE merging
//!
//! A group's annotation content must not depend on whether parts arrive
//! before or after their anchor; only the surface join order follows
//! document order. Both arrival orders are generated for every case.

use proptest::prelude::*;
use vuamc::vuamc::{parse_corpus, ParseOptions, TokenRecord};

fn corpus_with(tokens: &[String]) -> String {
    format!(
        r#"<TEI xmlns="http://www.tei-c.org/ns/1.0">
             <text xml:id="a1e-fragment01"><s n="1">{}</s></text>
           </TEI>"#,
        tokens.join("")
    )
}

fn anchor(word: &str) -> String {
    format!(r#"<w lemma="{word}" type="NN1" xml:id="w10">{word}</w>"#)
}

fn part(word: &str, tag: &str) -> String {
    format!(
        r##"<w lemma="{word}" type="PRP" corresp="#w10"><seg function="mrw" type="{tag}">{word}</seg></w>"##
    )
}

fn merged_row(xml: &str) -> TokenRecord {
    let rows = parse_corpus(xml, &ParseOptions::default()).expect("fixture parses");
    assert_eq!(rows.len(), 1, "all tokens collapse into one group");
    rows.into_iter().next().unwrap()
}

fn tag_set(list: &str) -> std::collections::BTreeSet<String> {
    list.split('|')
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

proptest! {
    #[test]
    fn annotation_content_ignores_arrival_order(
        anchor_word in "[a-z]{1,8}",
        parts in prop::collection::vec(("[a-z]{1,8}", "[A-Za-z]{1,6}"), 1..4),
    ) {
        let part_tokens: Vec<String> = parts.iter().map(|(w, t)| part(w, t)).collect();

        let mut anchor_first = vec![anchor(&anchor_word)];
        anchor_first.extend(part_tokens.iter().cloned());
        let mut anchor_last = part_tokens.clone();
        anchor_last.push(anchor(&anchor_word));

        let first = merged_row(&corpus_with(&anchor_first));
        let last = merged_row(&corpus_with(&anchor_last));

        // Surface text joins in document arrival order.
        let part_words: Vec<&str> = parts.iter().map(|(w, _)| w.as_str()).collect();
        let mut forward = vec![anchor_word.as_str()];
        forward.extend(part_words.iter().copied());
        let mut backward = part_words.clone();
        backward.push(anchor_word.as_str());
        prop_assert_eq!(first.word, forward.join(" "));
        prop_assert_eq!(last.word, backward.join(" "));

        // Everything else is order-independent.
        prop_assert_eq!(&first.metaphor, "mrw");
        prop_assert_eq!(&first.metaphor, &last.metaphor);
        prop_assert_eq!(&first.mflag, &last.mflag);
        prop_assert_eq!(tag_set(&first.mrw_type), tag_set(&last.mrw_type));
        prop_assert_eq!(tag_set(&first.subtype), tag_set(&last.subtype));
        prop_assert_eq!(&first.xml_id, "w10");
        prop_assert_eq!(&last.xml_id, "w10");
        prop_assert_eq!(&first.corresp, "");
        prop_assert_eq!(&last.corresp, "");
    }

    #[test]
    fn plain_sentences_round_trip_every_token(
        tokens in prop::collection::vec("[a-z]{1,8}", 1..8),
    ) {
        let body: Vec<String> = tokens
            .iter()
            .map(|w| format!(r#"<w lemma="{w}" type="NN1">{w}</w>"#))
            .collect();
        let rows = parse_corpus(&corpus_with(&body), &ParseOptions::default())
            .expect("fixture parses");
        let words: Vec<&str> = rows.iter().map(|r| r.word.as_str()).collect();
        prop_assert_eq!(words, tokens.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
