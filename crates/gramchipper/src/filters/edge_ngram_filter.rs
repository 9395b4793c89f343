//! # Edge N-Gram Token Filter

use crate::analysis::{TokenAttributes, TokenStream, Tokenizer};
use crate::config::Side;
use crate::errors::{GCResult, GramchipperError, check_gram_range};
use crate::filters::TermState;
use crate::source::CharSource;

/// Re-segments each upstream term into its front-anchored grams.
///
/// For a term of `n` code points, emits the first `g` code points for `g`
/// in `min_gram..=min(max_gram, n)`.
///
/// Offsets are sub-offsets of the token's when the token offsets span
/// exactly its text; otherwise every gram carries the token's offsets.
/// The first gram of a term carries the term's position increment, plus
/// those of preceding terms too short to produce any gram; later grams
/// carry 0. Position lengths pass through.
pub struct EdgeNGramTokenFilter<S: TokenStream> {
    input: S,
    min_gram: usize,
    max_gram: usize,

    attrs: TokenAttributes,
    current: Option<TermState>,
    gram_size: usize,
    saved_position_increment: usize,
}

impl<S: TokenStream> EdgeNGramTokenFilter<S> {
    /// Wrap `input`, emitting front grams over `[min_gram, max_gram]`.
    pub fn new(
        input: S,
        min_gram: usize,
        max_gram: usize,
    ) -> GCResult<Self> {
        Self::with_side(input, Side::Front, min_gram, max_gram)
    }

    /// Wrap `input`, emitting grams anchored on `side`.
    ///
    /// ## Errors
    /// * [`GramchipperError::InvalidConfiguration`] - unless `1 <= min_gram <= max_gram`.
    /// * [`GramchipperError::UnsupportedConfiguration`] - for [`Side::Back`].
    pub fn with_side(
        input: S,
        side: Side,
        min_gram: usize,
        max_gram: usize,
    ) -> GCResult<Self> {
        check_gram_range(min_gram, max_gram)?;
        if side == Side::Back {
            return Err(GramchipperError::UnsupportedConfiguration(
                "back edge grams are no longer supported; reverse the terms instead".to_string(),
            ));
        }

        Ok(Self {
            input,
            min_gram,
            max_gram,
            attrs: TokenAttributes::default(),
            current: None,
            gram_size: min_gram,
            saved_position_increment: 0,
        })
    }

    /// The wrapped stream.
    pub fn inner(&self) -> &S {
        &self.input
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

impl<S: TokenStream> TokenStream for EdgeNGramTokenFilter<S> {
    fn reset(&mut self) -> GCResult<()> {
        self.input.reset()?;
        self.attrs.clear();
        self.current = None;
        self.gram_size = self.min_gram;
        self.saved_position_increment = 0;
        Ok(())
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self))
    )]
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
                    self.gram_size = self.min_gram;
                    slot.insert(TermState::capture(upstream))
                }
            };

            if self.gram_size <= self.max_gram && self.gram_size <= term.len() {
                self.attrs.clear();
                term.write_gram(0..self.gram_size, &mut self.attrs);

                self.attrs.position_increment = if self.gram_size == self.min_gram {
                    core::mem::take(&mut self.saved_position_increment)
                } else {
                    0
                };

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
impl<S: Tokenizer> Tokenizer for EdgeNGramTokenFilter<S> {
    fn set_source(
        &mut self,
        source: Box<dyn CharSource>,
    ) {
        self.input.set_source(source)
    }
}
