//! # Character Sources
//!
//! Tokenizers pull UTF-16 code units from a [`CharSource`].
//!
//! * [`Utf16Source`] - in-memory text or raw units.
//! * [`ReaderSource`] - incremental UTF-8 decoding over any [`std::io::Read`].

mod char_source;
mod reader_source;

#[doc(inline)]
pub use char_source::*;
#[doc(inline)]
pub use reader_source::*;
