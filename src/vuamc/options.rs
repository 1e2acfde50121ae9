//! Processing switches for a conversion run
//!
//! One implementation serves every extraction variant; the switches below
//! select which exclusions and corrections apply. The defaults reproduce
//! the production configuration.

/// Flags controlling extraction and the corpus-level correction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Skip tokens whose POS tag is the punctuation marker.
    pub exclude_punctuation: bool,
    /// Skip tokens containing a truncation annotation at any depth.
    pub exclude_truncation: bool,
    /// Clear metaphor marking on News-register "of" rows after extraction.
    pub apply_news_of_correction: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            exclude_punctuation: true,
            exclude_truncation: true,
            apply_news_of_correction: true,
        }
    }
}
