//! # Character Class Tokenizer

use std::sync::Arc;

use crate::analysis::{
    AcceptAll,
    LetterOrDigit,
    NonWhitespace,
    SharedPredicate,
    SourceSlot,
    TokenAttributes,
    TokenCharPredicate,
    TokenStream,
    Tokenizer,
};
use crate::buffer::{CodePointBuffer, GramCursor};
use crate::errors::GCResult;
use crate::source::CharSource;

/// Default maximum token length, in code points.
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 255;

/// Splits input into maximal runs of token characters.
///
/// Runs longer than the max token length are split. This is the usual
/// upstream for [`EdgeNGramTokenFilter`](crate::filters::EdgeNGramTokenFilter)
/// and [`NGramTokenFilter`](crate::filters::NGramTokenFilter).
pub struct CharTokenizer {
    predicate: SharedPredicate,
    max_token_length: usize,

    input: SourceSlot,
    buffer: CodePointBuffer,
    cursor: GramCursor,
    attrs: TokenAttributes,
}

impl CharTokenizer {
    /// Build a tokenizer keeping runs of code points accepted by `predicate`.
    pub fn new<P>(predicate: P) -> Self
    where
        P: TokenCharPredicate + 'static,
    {
        Self::from_shared(Arc::new(predicate))
    }

    /// Build a tokenizer from a shared predicate.
    pub fn from_shared(predicate: SharedPredicate) -> Self {
        Self {
            predicate,
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
            input: SourceSlot::default(),
            buffer: CodePointBuffer::new(1),
            cursor: GramCursor::new(1),
            attrs: TokenAttributes::default(),
        }
    }

    /// Split on whitespace.
    pub fn whitespace() -> Self {
        Self::new(NonWhitespace)
    }

    /// Keep runs of letters and digits.
    pub fn letter_or_digit() -> Self {
        Self::new(LetterOrDigit)
    }

    /// Emit the whole input as a single token.
    pub fn keyword() -> Self {
        Self::new(AcceptAll).with_max_token_length(usize::MAX)
    }

    /// Set the maximum token length, in code points; at least 1.
    pub fn with_max_token_length(
        self,
        max_token_length: usize,
    ) -> Self {
        Self {
            max_token_length: max_token_length.max(1),
            ..self
        }
    }

    /// Get the maximum token length.
    pub fn max_token_length(&self) -> usize {
        self.max_token_length
    }
}

impl TokenStream for CharTokenizer {
    fn reset(&mut self) -> GCResult<()> {
        self.input.begin()?;
        self.buffer.reset();
        self.cursor.reset(1, self.buffer.start());
        self.attrs.clear();
        Ok(())
    }

    fn increment_token(&mut self) -> GCResult<bool> {
        let source = self.input.streaming_source()?;
        self.attrs.clear();

        let mut length = 0;
        loop {
            self.buffer.ensure_window(source, &mut self.cursor)?;
            if self.buffer.is_empty() {
                break;
            }

            let c = self.buffer.get(self.buffer.start());
            if self.predicate.is_token_char(c) {
                if length == 0 {
                    self.attrs.start_offset = self.cursor.stream_offset();
                }
                self.attrs.term.push(c);
                self.buffer.consume(&mut self.cursor);
                length += 1;
                if length == self.max_token_length {
                    break;
                }
            } else if length > 0 {
                break;
            } else {
                self.buffer.consume(&mut self.cursor);
            }
        }

        if length == 0 {
            return Ok(false);
        }
        self.attrs.end_offset = self.cursor.stream_offset();
        Ok(true)
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

impl Tokenizer for CharTokenizer {
    fn set_source(
        &mut self,
        source: Box<dyn CharSource>,
    ) {
        self.input.attach(source);
    }
}
