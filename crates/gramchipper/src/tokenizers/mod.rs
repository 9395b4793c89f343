//! # Tokenizers
//!
//! Tokenizers read a [`CharSource`](crate::source::CharSource) directly:
//! * [`NGramTokenizer`] - the streaming gram engine.
//! * [`EdgeNGramTokenizer`] - the streaming engine, front edges only.
//! * [`CharTokenizer`] - runs of token characters; an upstream for filters.
//! * [`GramTokenizer`] - a gram tokenizer selected from a [`GramConfig`](crate::config::GramConfig).

mod char_tokenizer;
mod edge_ngram_tokenizer;
mod gram_tokenizer;
mod ngram_tokenizer;

#[doc(inline)]
pub use char_tokenizer::*;
#[doc(inline)]
pub use edge_ngram_tokenizer::*;
#[doc(inline)]
pub use gram_tokenizer::*;
#[doc(inline)]
pub use ngram_tokenizer::*;
