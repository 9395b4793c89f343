//! # Token Stream Protocol
//!
//! Consumers drive a stream as:
//!
//! ```text
//! set_source() -> reset() -> increment_token()* -> end()
//! ```
//!
//! and read [`TokenAttributes`] after each successful `increment_token()`.

use crate::analysis::TokenAttributes;
use crate::errors::{GCResult, GramchipperError};
use crate::source::CharSource;

/// A pull-based stream of tokens.
pub trait TokenStream: Send {
    /// Prepare to stream from the current input.
    ///
    /// Reinitializes all per-stream state.
    fn reset(&mut self) -> GCResult<()>;

    /// Advance to the next token.
    ///
    /// ## Returns
    /// `true` if the attributes hold a new token; `false` at end of stream.
    fn increment_token(&mut self) -> GCResult<bool>;

    /// Finish the stream; sets a zero-width final offset pair.
    fn end(&mut self) -> GCResult<()>;

    /// The current attribute slots.
    fn attributes(&self) -> &TokenAttributes;
}

/// A [`TokenStream`] reading directly from a [`CharSource`].
pub trait Tokenizer: TokenStream {
    /// Attach a new input; `reset()` must follow before streaming.
    fn set_source(
        &mut self,
        source: Box<dyn CharSource>,
    );
}

impl<T: TokenStream + ?Sized> TokenStream for Box<T> {
    fn reset(&mut self) -> GCResult<()> {
        (**self).reset()
    }

    fn increment_token(&mut self) -> GCResult<bool> {
        (**self).increment_token()
    }

    fn end(&mut self) -> GCResult<()> {
        (**self).end()
    }

    fn attributes(&self) -> &TokenAttributes {
        (**self).attributes()
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    fn set_source(
        &mut self,
        source: Box<dyn CharSource>,
    ) {
        (**self).set_source(source)
    }
}

/// Lifecycle phase of a [`Tokenizer`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StreamPhase {
    /// No input attached.
    #[default]
    Detached,

    /// Input attached; waiting for `reset()`.
    Attached,

    /// Between `reset()` and `end()`.
    Streaming,

    /// `end()` was called.
    Ended,
}

/// The input slot of a [`Tokenizer`], enforcing the stream protocol.
#[derive(Default)]
pub struct SourceSlot {
    source: Option<Box<dyn CharSource>>,
    phase: StreamPhase,
}

impl SourceSlot {
    /// The current phase.
    pub fn phase(&self) -> StreamPhase {
        self.phase
    }

    /// Attach a new input.
    pub fn attach(
        &mut self,
        source: Box<dyn CharSource>,
    ) {
        self.source = Some(source);
        self.phase = StreamPhase::Attached;
    }

    /// Move from `Attached` to `Streaming`.
    pub fn begin(&mut self) -> GCResult<()> {
        match self.phase {
            StreamPhase::Attached => {
                self.phase = StreamPhase::Streaming;
                Ok(())
            }
            StreamPhase::Detached => Err(illegal("reset() called with no source attached")),
            StreamPhase::Streaming => Err(illegal("reset() called twice; attach a new source")),
            StreamPhase::Ended => Err(illegal("reset() called after end(); attach a new source")),
        }
    }

    /// The input, if the stream is between `reset()` and `end()`.
    pub fn streaming_source(&mut self) -> GCResult<&mut dyn CharSource> {
        match (self.phase, self.source.as_mut()) {
            (StreamPhase::Streaming, Some(source)) => Ok(source.as_mut()),
            (phase, _) => Err(illegal(&format!(
                "increment_token() called in phase {phase:?}; call reset() first"
            ))),
        }
    }

    /// Move from `Streaming` to `Ended`.
    pub fn finish(&mut self) -> GCResult<()> {
        match self.phase {
            StreamPhase::Streaming => {
                self.phase = StreamPhase::Ended;
                Ok(())
            }
            phase => Err(illegal(&format!("end() called in phase {phase:?}"))),
        }
    }
}

fn illegal(msg: &str) -> GramchipperError {
    GramchipperError::IllegalState(msg.to_string())
}

/// The output of a full pass over a [`TokenStream`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    /// Every emitted token, in order.
    pub tokens: Vec<TokenAttributes>,

    /// The final offset reported by `end()`.
    pub final_offset: usize,
}

impl Analysis {
    /// The terms of [`Self::tokens`].
    pub fn terms(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.term.as_str()).collect()
    }
}

/// Run `reset()`, `increment_token()` to exhaustion, and `end()`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(stream)))]
pub fn consume_stream<S: TokenStream + ?Sized>(stream: &mut S) -> GCResult<Analysis> {
    stream.reset()?;
    let mut tokens = Vec::new();
    while stream.increment_token()? {
        tokens.push(stream.attributes().clone());
    }
    stream.end()?;
    Ok(Analysis {
        tokens,
        final_offset: stream.attributes().end_offset,
    })
}

/// Attach `source` to `tokenizer` and run [`consume_stream`].
pub fn analyze<T, S>(
    tokenizer: &mut T,
    source: S,
) -> GCResult<Analysis>
where
    T: Tokenizer + ?Sized,
    S: CharSource + 'static,
{
    tokenizer.set_source(Box::new(source));
    consume_stream(tokenizer)
}
