//! # Streaming Edge N-Gram Tokenizer

use crate::analysis::{TokenAttributes, TokenCharPredicate, TokenStream, Tokenizer};
use crate::config::Side;
use crate::errors::{GCResult, GramchipperError};
use crate::source::CharSource;
use crate::tokenizers::NGramTokenizer;

/// Streaming edge n-gram tokenizer.
///
/// An [`NGramTokenizer`] restricted to grams anchored at the front of each
/// unit. With the default predicate the whole input is one unit; with e.g.
/// [`NonWhitespace`](crate::analysis::NonWhitespace), each run of token
/// characters is.
pub struct EdgeNGramTokenizer {
    inner: NGramTokenizer,
}

impl EdgeNGramTokenizer {
    /// Build a front edge tokenizer over `[min_gram, max_gram]`.
    pub fn new(
        min_gram: usize,
        max_gram: usize,
    ) -> GCResult<Self> {
        Self::with_side(Side::Front, min_gram, max_gram)
    }

    /// Build an edge tokenizer anchored on `side`.
    ///
    /// ## Errors
    /// * [`GramchipperError::InvalidConfiguration`] - unless `1 <= min_gram <= max_gram`.
    /// * [`GramchipperError::UnsupportedConfiguration`] - for [`Side::Back`]; back
    ///   edges are only available from
    ///   [`LegacyEdgeNGramTokenizer`](crate::legacy::LegacyEdgeNGramTokenizer).
    pub fn with_side(
        side: Side,
        min_gram: usize,
        max_gram: usize,
    ) -> GCResult<Self> {
        let inner = NGramTokenizer::new(min_gram, max_gram)?.with_edges_only(true);
        if side == Side::Back {
            return Err(GramchipperError::UnsupportedConfiguration(
                "back edge grams are not supported by the streaming engine".to_string(),
            ));
        }
        Ok(Self { inner })
    }

    /// Set the token char predicate; units are runs of token characters.
    pub fn with_predicate<P>(
        self,
        predicate: P,
    ) -> Self
    where
        P: TokenCharPredicate + 'static,
    {
        Self {
            inner: self.inner.with_predicate(predicate),
        }
    }

    /// Get the minimum gram size.
    pub fn min_gram(&self) -> usize {
        self.inner.min_gram()
    }

    /// Get the maximum gram size.
    pub fn max_gram(&self) -> usize {
        self.inner.max_gram()
    }
}

impl TokenStream for EdgeNGramTokenizer {
    fn reset(&mut self) -> GCResult<()> {
        self.inner.reset()
    }

    fn increment_token(&mut self) -> GCResult<bool> {
        self.inner.increment_token()
    }

    fn end(&mut self) -> GCResult<()> {
        self.inner.end()
    }

    fn attributes(&self) -> &TokenAttributes {
        self.inner.attributes()
    }
}

impl Tokenizer for EdgeNGramTokenizer {
    fn set_source(
        &mut self,
        source: Box<dyn CharSource>,
    ) {
        self.inner.set_source(source)
    }
}
