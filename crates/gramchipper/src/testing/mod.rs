//! # Testing Utilities
//!
//! Sources and streams with controlled behavior, for exercising tokenizers
//! and filters.

use std::io;

use crate::analysis::{TokenAttributes, TokenStream, Tokenizer, analyze};
use crate::errors::GCResult;
use crate::source::{CharSource, Utf16Source};

/// A [`CharSource`] that returns at most `chunk` units per read.
///
/// Surrogate pairs may be split across reads.
#[derive(Debug, Clone)]
pub struct ChunkedSource {
    inner: Utf16Source,
    chunk: usize,
}

impl ChunkedSource {
    /// Serve `text` in reads of at most `chunk` units.
    pub fn new(
        text: &str,
        chunk: usize,
    ) -> Self {
        Self {
            inner: Utf16Source::from_text(text),
            chunk: chunk.max(1),
        }
    }
}

impl CharSource for ChunkedSource {
    fn read_chars(
        &mut self,
        buf: &mut [u16],
    ) -> io::Result<usize> {
        let n = buf.len().min(self.chunk);
        self.inner.read_chars(&mut buf[..n])
    }
}

/// A [`CharSource`] that fails once `fail_after` units have been served.
#[derive(Debug, Clone)]
pub struct FailingSource {
    inner: Utf16Source,
    remaining: usize,
}

impl FailingSource {
    /// Serve the first `fail_after` units of `text`, then fail.
    pub fn new(
        text: &str,
        fail_after: usize,
    ) -> Self {
        Self {
            inner: Utf16Source::from_text(text),
            remaining: fail_after,
        }
    }
}

impl CharSource for FailingSource {
    fn read_chars(
        &mut self,
        buf: &mut [u16],
    ) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::other("source failed"));
        }
        let n = buf.len().min(self.remaining);
        let read = self.inner.read_chars(&mut buf[..n])?;
        self.remaining -= read;
        if read == 0 {
            self.remaining = 0;
        }
        Ok(read)
    }
}

/// A [`TokenStream`] replaying a fixed list of tokens.
///
/// `reset()` rewinds; `end()` reports `final_offset`.
#[derive(Debug, Clone)]
pub struct CannedTokenStream {
    tokens: Vec<TokenAttributes>,
    final_offset: usize,
    next: usize,
    attrs: TokenAttributes,
}

impl CannedTokenStream {
    /// Replay `tokens`, then end at `final_offset`.
    pub fn new(
        tokens: Vec<TokenAttributes>,
        final_offset: usize,
    ) -> Self {
        Self {
            tokens,
            final_offset,
            next: 0,
            attrs: TokenAttributes::default(),
        }
    }
}

impl TokenStream for CannedTokenStream {
    fn reset(&mut self) -> GCResult<()> {
        self.next = 0;
        self.attrs.clear();
        Ok(())
    }

    fn increment_token(&mut self) -> GCResult<bool> {
        match self.tokens.get(self.next) {
            Some(token) => {
                self.attrs.clone_from(token);
                self.next += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn end(&mut self) -> GCResult<()> {
        self.attrs.clear();
        self.attrs.set_offsets(self.final_offset, self.final_offset);
        self.attrs.position_increment = 0;
        Ok(())
    }

    fn attributes(&self) -> &TokenAttributes {
        &self.attrs
    }
}

/// A token with increment and length 1.
pub fn token(
    term: &str,
    start_offset: usize,
    end_offset: usize,
) -> TokenAttributes {
    let mut attrs = TokenAttributes::default();
    attrs.set_term(term);
    attrs.set_offsets(start_offset, end_offset);
    attrs
}

/// Analyze `text` and assert the `(term, start, end)` triples and final offset.
///
/// ## Panics
/// On any error, or any mismatch.
pub fn assert_grams<T: Tokenizer + ?Sized>(
    tokenizer: &mut T,
    text: &str,
    expected: &[(&str, usize, usize)],
    final_offset: usize,
) {
    let analysis = match analyze(tokenizer, Utf16Source::from_text(text)) {
        Ok(analysis) => analysis,
        Err(err) => panic!("analysis of {text:?} failed: {err}"),
    };

    let actual: Vec<(&str, usize, usize)> = analysis
        .tokens
        .iter()
        .map(|t| (t.term.as_str(), t.start_offset, t.end_offset))
        .collect();
    assert_eq!(actual, expected, "grams of {text:?}");
    assert_eq!(analysis.final_offset, final_offset, "final offset of {text:?}");
}
