//! # `gramchipper` Streaming N-Gram Tokenizers
//!
//! `gramchipper` splits character streams into overlapping n-grams, with
//! exact UTF-16 offsets, in bounded memory.
//!
//! See:
//! * [`tokenizers`] for the streaming n-gram and edge n-gram tokenizers.
//! * [`filters`] to re-segment the terms of another [`TokenStream`] into grams.
//! * [`legacy`] for the whole-buffer engines, kept for historical output.
//! * [`config`] to select and validate a tokenizer with a [`GramConfig`].
//! * [`source`] for the [`source::CharSource`] inputs tokenizers read from.
//!
//! ## Crate Features
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! #### feature: ``testing``
//!
//! Exposes the [`testing`] sources and canned streams to downstream users.
//!
//! ## Streaming Grams
//!
//! ```rust
//! use gramchipper::GramConfig;
//! use gramchipper::analysis::analyze;
//! use gramchipper::source::Utf16Source;
//!
//! let mut tokenizer = GramConfig::new(2, 3).build()?;
//! let analysis = analyze(&mut tokenizer, Utf16Source::from("abcd"))?;
//!
//! assert_eq!(analysis.terms(), vec!["ab", "abc", "bc", "bcd", "cd"]);
//! assert_eq!(analysis.final_offset, 4);
//! # Ok::<(), gramchipper::GramchipperError>(())
//! ```
#![warn(missing_docs, unused)]

pub mod analysis;
pub mod buffer;
pub mod config;
pub mod errors;
pub mod filters;
pub mod legacy;
pub mod source;
pub mod tokenizers;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[doc(inline)]
pub use analysis::{TokenAttributes, TokenStream, Tokenizer};
#[doc(inline)]
pub use config::GramConfig;
#[doc(inline)]
pub use errors::{GCResult, GramchipperError};
#[doc(inline)]
pub use tokenizers::GramTokenizer;
