//! # Token Filters
//!
//! Filters re-segment the terms of an upstream [`TokenStream`](crate::analysis::TokenStream):
//! * [`EdgeNGramTokenFilter`] - front-anchored grams of each term.
//! * [`NGramTokenFilter`] - all grams of each term.

mod edge_ngram_filter;
mod ngram_filter;
mod term_state;

#[doc(inline)]
pub use edge_ngram_filter::*;
#[doc(inline)]
pub use ngram_filter::*;
#[doc(inline)]
pub use term_state::*;
