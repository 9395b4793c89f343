//! # Legacy N-Gram Tokenizer

use crate::analysis::{SourceSlot, TokenAttributes, TokenStream, Tokenizer};
use crate::errors::{GCResult, check_gram_range};
use crate::legacy::{LEGACY_READ_LIMIT, WholeInput};
use crate::source::CharSource;

/// Whole-buffer n-gram tokenizer, kept for historical output.
///
/// On the first step, reads at most [`LEGACY_READ_LIMIT`] units and trims
/// them. Grams are emitted by size, then by position; offsets are
/// positions in the *trimmed* text, and a surrogate pair may be split.
///
/// The first gram has a position increment of 1; the rest, 0.
pub struct LegacyNGramTokenizer {
    min_gram: usize,
    max_gram: usize,

    input: SourceSlot,
    attrs: TokenAttributes,

    whole: Option<WholeInput>,
    gram_size: usize,
    pos: usize,
    emitted: bool,
}

impl LegacyNGramTokenizer {
    /// Build a tokenizer over `[min_gram, max_gram]`.
    pub fn new(
        min_gram: usize,
        max_gram: usize,
    ) -> GCResult<Self> {
        check_gram_range(min_gram, max_gram)?;
        log::debug!("legacy n-gram tokenizer: [{min_gram}, {max_gram}]");

        Ok(Self {
            min_gram,
            max_gram,
            input: SourceSlot::default(),
            attrs: TokenAttributes::default(),
            whole: None,
            gram_size: min_gram,
            pos: 0,
            emitted: false,
        })
    }

    /// Get the minimum gram size.
    pub fn min_gram(&self) -> usize {
        self.min_gram
    }

    /// Get the maximum gram size.
    pub fn max_gram(&self) -> usize {
        self.max_gram
    }
}

impl TokenStream for LegacyNGramTokenizer {
    fn reset(&mut self) -> GCResult<()> {
        self.input.begin()?;
        self.attrs.clear();
        self.whole = None;
        self.gram_size = self.min_gram;
        self.pos = 0;
        self.emitted = false;
        Ok(())
    }

    fn increment_token(&mut self) -> GCResult<bool> {
        let source = self.input.streaming_source()?;
        self.attrs.clear();

        let whole = match &mut self.whole {
            Some(whole) => whole,
            slot @ None => slot.insert(WholeInput::read(source, LEGACY_READ_LIMIT)?),
        };
        let len = whole.len();

        if self.pos + self.gram_size > len {
            self.pos = 0;
            self.gram_size += 1;
            if self.gram_size > self.max_gram || self.gram_size > len {
                return Ok(false);
            }
        }

        let start = self.pos;
        let end = start + self.gram_size;
        self.attrs.term = whole.text(start, end);
        self.attrs.set_offsets(start, end);
        self.attrs.position_increment = if self.emitted { 0 } else { 1 };

        self.pos += 1;
        self.emitted = true;
        Ok(true)
    }

    fn end(&mut self) -> GCResult<()> {
        self.input.finish()?;

        let final_offset = self.whole.as_ref().map_or(0, |w| w.units_read);
        self.attrs.clear();
        self.attrs.set_offsets(final_offset, final_offset);
        self.attrs.position_increment = 0;
        Ok(())
    }

    fn attributes(&self) -> &TokenAttributes {
        &self.attrs
    }
}

impl Tokenizer for LegacyNGramTokenizer {
    fn set_source(
        &mut self,
        source: Box<dyn CharSource>,
    ) {
        self.input.attach(source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::source::Utf16Source;
    use crate::testing::assert_grams;

    #[test]
    fn test_size_major_order() {
        let mut tokenizer = LegacyNGramTokenizer::new(1, 2).unwrap();
        assert_grams(
            &mut tokenizer,
            "abc",
            &[
                ("a", 0, 1),
                ("b", 1, 2),
                ("c", 2, 3),
                ("ab", 0, 2),
                ("bc", 1, 3),
            ],
            3,
        );
    }

    #[test]
    fn test_position_increments() {
        let mut tokenizer = LegacyNGramTokenizer::new(2, 3).unwrap();
        let analysis = analyze(&mut tokenizer, Utf16Source::from("abcde")).unwrap();
        assert_eq!(
            analysis.terms(),
            vec!["ab", "bc", "cd", "de", "abc", "bcd", "cde"]
        );
        let increments: Vec<usize> = analysis
            .tokens
            .iter()
            .map(|t| t.position_increment)
            .collect();
        assert_eq!(increments, vec![1, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_trims_and_shifts_offsets() {
        let mut tokenizer = LegacyNGramTokenizer::new(2, 2).unwrap();
        assert_grams(
            &mut tokenizer,
            "  abc ",
            &[("ab", 0, 2), ("bc", 1, 3)],
            6,
        );
    }

    #[test]
    fn test_caps_input() {
        let text = format!("{}xyz", "a".repeat(LEGACY_READ_LIMIT - 1));
        let mut tokenizer = LegacyNGramTokenizer::new(2, 2).unwrap();
        let analysis = analyze(&mut tokenizer, Utf16Source::from(text.as_str())).unwrap();

        assert_eq!(analysis.tokens.len(), LEGACY_READ_LIMIT - 1);
        assert_eq!(analysis.tokens.last().unwrap().term, "ax");
        assert_eq!(analysis.final_offset, LEGACY_READ_LIMIT + 2);
    }

    #[test]
    fn test_empty_and_blank() {
        let mut tokenizer = LegacyNGramTokenizer::new(1, 3).unwrap();
        assert_grams(&mut tokenizer, "", &[], 0);
        assert_grams(&mut tokenizer, " \t ", &[], 3);
    }

    #[test]
    fn test_splits_surrogates() {
        let mut tokenizer = LegacyNGramTokenizer::new(1, 1).unwrap();
        let analysis = analyze(&mut tokenizer, Utf16Source::from("\u{1F600}")).unwrap();
        assert_eq!(analysis.terms(), vec!["\u{FFFD}", "\u{FFFD}"]);
    }
}
