//! # Legacy Engines
//!
//! Whole-buffer tokenizers whose output is preserved for callers pinned to
//! historical behavior:
//! * [`LegacyNGramTokenizer`] - grams ordered by size, then position.
//! * [`LegacyEdgeNGramTokenizer`] - front or back edge grams.
//!
//! Both read a capped prefix of the input up front and trim it; offsets
//! are relative to the trimmed text. New code should use the streaming
//! tokenizers in [`crate::tokenizers`].

mod legacy_edge_ngram_tokenizer;
mod legacy_ngram_tokenizer;
mod whole_input;

#[doc(inline)]
pub use legacy_edge_ngram_tokenizer::*;
#[doc(inline)]
pub use legacy_ngram_tokenizer::*;
#[doc(inline)]
pub use whole_input::*;
