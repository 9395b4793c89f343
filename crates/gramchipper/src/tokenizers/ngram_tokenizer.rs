//! # Streaming N-Gram Tokenizer

use std::sync::Arc;

use crate::analysis::{
    SharedPredicate,
    SourceSlot,
    TokenAttributes,
    TokenCharPredicate,
    TokenStream,
    Tokenizer,
    accept_all,
};
use crate::buffer::{CodePointBuffer, GramCursor};
use crate::config::{EngineVersion, GramConfig};
use crate::errors::{GCResult, GramchipperError, check_gram_range};
use crate::source::CharSource;

/// Streaming n-gram tokenizer.
///
/// Emits every gram of `[min_gram, max_gram]` code points, ordered by
/// start offset, then by length. Input is read through a bounded
/// [`CodePointBuffer`], so the input length is unbounded.
///
/// A gram holding a code point rejected by the token char predicate is
/// skipped. With `edges_only`, only grams starting at the input start, or
/// right after a rejected code point, are emitted.
///
/// Offsets are exact, in UTF-16 units; every gram has a position
/// increment and length of 1.
pub struct NGramTokenizer {
    min_gram: usize,
    max_gram: usize,
    edges_only: bool,
    predicate: SharedPredicate,

    input: SourceSlot,
    buffer: CodePointBuffer,
    cursor: GramCursor,
    attrs: TokenAttributes,
}

impl NGramTokenizer {
    /// Build an all-grams tokenizer over `[min_gram, max_gram]`.
    ///
    /// ## Errors
    /// [`GramchipperError::InvalidConfiguration`] unless
    /// `1 <= min_gram <= max_gram <= MAX_GRAM_SIZE`.
    pub fn new(
        min_gram: usize,
        max_gram: usize,
    ) -> GCResult<Self> {
        check_gram_range(min_gram, max_gram)?;
        log::debug!("streaming n-gram tokenizer: [{min_gram}, {max_gram}]");

        Ok(Self {
            min_gram,
            max_gram,
            edges_only: false,
            predicate: accept_all(),
            input: SourceSlot::default(),
            buffer: CodePointBuffer::new(max_gram),
            cursor: GramCursor::new(min_gram),
            attrs: TokenAttributes::default(),
        })
    }

    /// Build from a streaming [`GramConfig`].
    pub fn from_config(config: &GramConfig) -> GCResult<Self> {
        config.validate()?;
        if config.engine() != EngineVersion::Streaming {
            return Err(GramchipperError::UnsupportedConfiguration(format!(
                "engine {} is not the streaming engine",
                config.engine()
            )));
        }

        let tokenizer = Self::new(config.min_gram(), config.max_gram())?
            .with_edges_only(config.edges_only());
        Ok(match config.predicate() {
            Some(predicate) => tokenizer.with_shared_predicate(predicate.clone()),
            None => tokenizer,
        })
    }

    /// Restrict grams to unit edges.
    pub fn with_edges_only(
        self,
        edges_only: bool,
    ) -> Self {
        Self { edges_only, ..self }
    }

    /// Set the token char predicate.
    pub fn with_predicate<P>(
        self,
        predicate: P,
    ) -> Self
    where
        P: TokenCharPredicate + 'static,
    {
        self.with_shared_predicate(Arc::new(predicate))
    }

    /// Set a shared token char predicate.
    pub fn with_shared_predicate(
        self,
        predicate: SharedPredicate,
    ) -> Self {
        Self { predicate, ..self }
    }

    /// Get the minimum gram size.
    pub fn min_gram(&self) -> usize {
        self.min_gram
    }

    /// Get the maximum gram size.
    pub fn max_gram(&self) -> usize {
        self.max_gram
    }

    /// Are grams restricted to unit edges?
    pub fn edges_only(&self) -> bool {
        self.edges_only
    }
}

impl TokenStream for NGramTokenizer {
    fn reset(&mut self) -> GCResult<()> {
        self.input.begin()?;
        self.buffer.reset();
        self.cursor.reset(self.min_gram, self.buffer.start());
        self.attrs.clear();
        Ok(())
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self))
    )]
    fn increment_token(&mut self) -> GCResult<bool> {
        let source = self.input.streaming_source()?;
        self.attrs.clear();

        // Every iteration either consumes a code point, or returns after
        // growing the gram; so the loop terminates.
        loop {
            self.buffer.ensure_window(source, &mut self.cursor)?;

            let gram_size = self.cursor.gram_size();
            if gram_size > self.max_gram || self.buffer.start() + gram_size > self.buffer.end() {
                if self.buffer.start() + 1 + self.min_gram > self.buffer.end() {
                    debug_assert!(self.buffer.is_exhausted());
                    return Ok(false);
                }
                self.buffer.consume(&mut self.cursor);
                self.cursor.set_gram_size(self.min_gram);
            }

            self.cursor
                .scan_rejections(&self.buffer, self.predicate.as_ref());

            let start = self.buffer.start();
            if self.cursor.gram_contains_rejection(start)
                || (self.edges_only && !self.cursor.at_edge(start))
            {
                self.buffer.consume(&mut self.cursor);
                self.cursor.set_gram_size(self.min_gram);
                continue;
            }

            let range = start..start + self.cursor.gram_size();
            let offset = self.cursor.stream_offset();
            let width = self.buffer.utf16_width(range.clone());

            self.attrs.set_term_chars(self.buffer.slice(range));
            self.attrs.set_offsets(offset, offset + width);
            self.attrs.position_increment = 1;
            self.attrs.position_length = 1;

            self.cursor.grow();
            return Ok(true);
        }
    }

    fn end(&mut self) -> GCResult<()> {
        self.input.finish()?;

        let final_offset = self.cursor.stream_offset()
            + self
                .buffer
                .utf16_width(self.buffer.start()..self.buffer.end());

        self.attrs.clear();
        self.attrs.set_offsets(final_offset, final_offset);
        self.attrs.position_increment = 0;
        Ok(())
    }

    fn attributes(&self) -> &TokenAttributes {
        &self.attrs
    }
}

impl Tokenizer for NGramTokenizer {
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
    use crate::analysis::{NonWhitespace, analyze};
    use crate::buffer::MAX_GRAM_SIZE;
    use crate::source::Utf16Source;
    use crate::testing::{ChunkedSource, FailingSource, assert_grams};

    #[test]
    fn test_all_grams() {
        let mut tokenizer = NGramTokenizer::new(2, 3).unwrap();
        assert_grams(
            &mut tokenizer,
            "abcde",
            &[
                ("ab", 0, 2),
                ("abc", 0, 3),
                ("bc", 1, 3),
                ("bcd", 1, 4),
                ("cd", 2, 4),
                ("cde", 2, 5),
                ("de", 3, 5),
            ],
            5,
        );
    }

    #[test]
    fn test_unigrams_and_bigrams() {
        let mut tokenizer = NGramTokenizer::new(1, 2).unwrap();
        assert_grams(
            &mut tokenizer,
            "abc",
            &[
                ("a", 0, 1),
                ("ab", 0, 2),
                ("b", 1, 2),
                ("bc", 1, 3),
                ("c", 2, 3),
            ],
            3,
        );
    }

    #[test]
    fn test_input_shorter_than_min_gram() {
        let mut tokenizer = NGramTokenizer::new(6, 7).unwrap();
        assert_grams(&mut tokenizer, "abcde", &[], 5);
    }

    #[test]
    fn test_empty_input() {
        let mut tokenizer = NGramTokenizer::new(1, 1).unwrap();
        assert_grams(&mut tokenizer, "", &[], 0);
    }

    #[test]
    fn test_edges_only() {
        let mut tokenizer = NGramTokenizer::new(1, 1).unwrap().with_edges_only(true);
        let analysis = analyze(&mut tokenizer, Utf16Source::from("abc")).unwrap();
        assert_eq!(analysis.terms(), vec!["a"]);
        assert_eq!(analysis.tokens[0].position_increment, 1);
        assert_eq!((analysis.tokens[0].start_offset, analysis.tokens[0].end_offset), (0, 1));
    }

    #[test]
    fn test_edges_with_predicate() {
        let mut tokenizer = NGramTokenizer::new(1, 3)
            .unwrap()
            .with_edges_only(true)
            .with_predicate(NonWhitespace);
        assert_grams(
            &mut tokenizer,
            "ab cd  efgh",
            &[
                ("a", 0, 1),
                ("ab", 0, 2),
                ("c", 3, 4),
                ("cd", 3, 5),
                ("e", 7, 8),
                ("ef", 7, 9),
                ("efg", 7, 10),
            ],
            11,
        );
    }

    #[test]
    fn test_predicate_skips_grams() {
        let mut tokenizer = NGramTokenizer::new(2, 2)
            .unwrap()
            .with_predicate(|c: char| c != '-');
        assert_grams(
            &mut tokenizer,
            "ab-cd",
            &[("ab", 0, 2), ("cd", 3, 5)],
            5,
        );
    }

    #[test]
    fn test_surrogate_pairs() {
        let mut tokenizer = NGramTokenizer::new(1, 1).unwrap();
        assert_grams(&mut tokenizer, "\u{1F600}", &[("\u{1F600}", 0, 2)], 2);

        let mut tokenizer = NGramTokenizer::new(1, 2).unwrap();
        assert_grams(
            &mut tokenizer,
            "a\u{10400}b",
            &[
                ("a", 0, 1),
                ("a\u{10400}", 0, 3),
                ("\u{10400}", 1, 3),
                ("\u{10400}b", 1, 4),
                ("b", 3, 4),
            ],
            4,
        );
    }

    #[test]
    fn test_long_input_across_refills() {
        let text: String = (0..5000).map(|i| (b'a' + (i % 26) as u8) as char).collect();
        let mut tokenizer = NGramTokenizer::new(3, 5).unwrap();
        tokenizer.set_source(Box::new(ChunkedSource::new(&text, 13)));
        tokenizer.reset().unwrap();

        let mut count = 0;
        while tokenizer.increment_token().unwrap() {
            let attrs = tokenizer.attributes();
            assert_eq!(&text[attrs.start_offset..attrs.end_offset], attrs.term);
            count += 1;
        }
        tokenizer.end().unwrap();

        // (n - 2) + (n - 3) + (n - 4) grams.
        assert_eq!(count, 3 * 5000 - 9);
        assert_eq!(tokenizer.attributes().end_offset, 5000);
    }

    #[test]
    fn test_reset_and_reuse() {
        let mut tokenizer = NGramTokenizer::new(1, 2).unwrap();
        let first = analyze(&mut tokenizer, Utf16Source::from("xyz")).unwrap();
        let second = analyze(&mut tokenizer, Utf16Source::from("xyz")).unwrap();
        assert_eq!(first, second);

        let other = analyze(&mut tokenizer, Utf16Source::from("q")).unwrap();
        assert_eq!(other.terms(), vec!["q"]);
        assert_eq!(other.final_offset, 1);
    }

    #[test]
    fn test_protocol_errors() {
        let mut tokenizer = NGramTokenizer::new(1, 2).unwrap();
        assert!(matches!(
            tokenizer.increment_token(),
            Err(GramchipperError::IllegalState(_))
        ));

        tokenizer.set_source(Box::new(Utf16Source::from("ab")));
        assert!(tokenizer.increment_token().is_err());
        tokenizer.reset().unwrap();
        assert!(tokenizer.increment_token().unwrap());
        tokenizer.end().unwrap();
        assert!(tokenizer.end().is_err());
    }

    #[test]
    fn test_io_failure() {
        let mut tokenizer = NGramTokenizer::new(1, 1).unwrap();
        tokenizer.set_source(Box::new(FailingSource::new("ab", 2)));
        tokenizer.reset().unwrap();
        assert!(matches!(
            tokenizer.increment_token(),
            Err(GramchipperError::Io(_))
        ));
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            NGramTokenizer::new(2, 1),
            Err(GramchipperError::InvalidConfiguration { .. })
        ));
        assert!(NGramTokenizer::new(0, 1).is_err());
        assert!(matches!(
            NGramTokenizer::new(1, usize::MAX / 2 + 1),
            Err(GramchipperError::InvalidConfiguration { .. })
        ));
        assert!(
            NGramTokenizer::from_config(&GramConfig::new(1, 2).with_engine(EngineVersion::Legacy))
                .is_err()
        );
    }

    #[test]
    fn test_largest_max_gram() {
        let mut tokenizer = NGramTokenizer::new(1, MAX_GRAM_SIZE).unwrap();
        assert_grams(
            &mut tokenizer,
            "abc",
            &[
                ("a", 0, 1),
                ("ab", 0, 2),
                ("abc", 0, 3),
                ("b", 1, 2),
                ("bc", 1, 3),
                ("c", 2, 3),
            ],
            3,
        );
    }
}
