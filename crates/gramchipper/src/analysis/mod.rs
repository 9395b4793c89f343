//! # Analysis Contract
//!
//! The narrow surface shared by every tokenizer and filter in this crate:
//! * [`TokenStream`] / [`Tokenizer`] - the pull protocol.
//! * [`TokenAttributes`] - the per-token output slots.
//! * [`TokenCharPredicate`] - which code points belong in a token.

mod predicates;
mod token_attributes;
mod token_stream;

#[doc(inline)]
pub use predicates::*;
#[doc(inline)]
pub use token_attributes::*;
#[doc(inline)]
pub use token_stream::*;
