//! Corpus-level fix-up pass applied once after full extraction

use crate::vuamc::genre::Genre;
use crate::vuamc::options::ParseOptions;
use crate::vuamc::record::TokenRecord;

/// Lemma targeted by the News-register correction.
const NEWS_OF_LEMMA: &str = "of";

/// Drop rows with no surface text, then apply the News "of" correction.
///
/// The correction clears Metaphor, Type and Subtype on News rows whose
/// lemma is "of" (ignoring case) and which carry an mrw marking. It targets
/// one documented annotation artifact of the News sections and must leave
/// every other genre and lemma untouched. Running it twice changes nothing.
pub fn apply(rows: &mut Vec<TokenRecord>, options: &ParseOptions) {
    rows.retain(|row| !row.word.trim().is_empty());

    if !options.apply_news_of_correction {
        return;
    }
    for row in rows.iter_mut() {
        if row.genre == Genre::News
            && row.lemma.eq_ignore_ascii_case(NEWS_OF_LEMMA)
            && row.metaphor == "mrw"
        {
            row.metaphor.clear();
            row.mrw_type.clear();
            row.subtype.clear();
        }
    }
}
