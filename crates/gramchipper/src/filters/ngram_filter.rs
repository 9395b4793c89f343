//! # N-Gram Token Filter

use crate::analysis::{TokenAttributes, TokenStream, Tokenizer};
use crate::errors::{GCResult, check_gram_range};
use crate::filters::TermState;
use crate::source::CharSource;

/// Re-segments each upstream term into all of its grams.
///
/// Grams of a term are ordered by start, then by length. Offsets and
/// positions follow the same policy as
/// [`EdgeNGramTokenFilter`](crate::filters::EdgeNGramTokenFilter).
pub struct NGramTokenFilter<S: TokenStream> {
    input: S,
    min_gram: usize,
    max_gram: usize,

    attrs: TokenAttributes,
    current: Option<TermState>,
    pos: usize,
    gram_size: usize,
    saved_position_increment: usize,
}

impl<S: TokenStream> NGramTokenFilter<S> {
    /// Wrap `input`, emitting grams over `[min_gram, max_gram]`.
    pub fn new(
        input: S,
        min_gram: usize,
        max_gram: usize,
    ) -> GCResult<Self> {
        check_gram_range(min_gram, max_gram)?;

        Ok(Self {
            input,
            min_gram,
            max_gram,
            attrs: TokenAttributes::default(),
            current: None,
            pos: 0,
            gram_size: min_gram,
            saved_position_increment: 0,
        })
    }

    /// The wrapped stream, mutably.
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.input
    }

    /// Unwrap the wrapped stream.
    pub fn into_inner(self) -> S {
        self.input
    }
}

impl<S: TokenStream> TokenStream for NGramTokenFilter<S> {
    fn reset(&mut self) -> GCResult<()> {
        self.input.reset()?;
        self.attrs.clear();
        self.current = None;
        self.pos = 0;
        self.gram_size = self.min_gram;
        self.saved_position_increment = 0;
        Ok(())
    }

    fn increment_token(&mut self) -> GCResult<bool> {
        loop {
            let term = match &mut self.current {
                Some(term) => term,
                slot @ None => {
                    if !self.input.increment_token()? {
                        return Ok(false);
                    }
                    let upstream = self.input.attributes();
                    self.saved_position_increment += upstream.position_increment;
                    self.pos = 0;
                    self.gram_size = self.min_gram;
                    slot.insert(TermState::capture(upstream))
                }
            };

            if self.gram_size > self.max_gram || self.pos + self.gram_size > term.len() {
                self.pos += 1;
                self.gram_size = self.min_gram;
            }

            if self.pos + self.gram_size <= term.len() {
                self.attrs.clear();
                term.write_gram(self.pos..self.pos + self.gram_size, &mut self.attrs);
                self.attrs.position_increment = core::mem::take(&mut self.saved_position_increment);

                self.gram_size += 1;
                return Ok(true);
            }

            self.current = None;
        }
    }

    fn end(&mut self) -> GCResult<()> {
        self.input.end()?;
        self.attrs.clone_from(self.input.attributes());
        Ok(())
    }

    fn attributes(&self) -> &TokenAttributes {
        &self.attrs
    }
}

/// A filter over a [`Tokenizer`] is itself a tokenizer.
impl<S: Tokenizer> Tokenizer for NGramTokenFilter<S> {
    fn set_source(
        &mut self,
        source: Box<dyn CharSource>,
    ) {
        self.input.set_source(source)
    }
}
