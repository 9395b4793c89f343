//! # Code Point Buffering
//!
//! [`CodePointBuffer`] holds a sliding window of decoded code points;
//! [`GramCursor`] tracks the gram being built over that window.

mod code_point_buffer;
mod gram_cursor;

#[doc(inline)]
pub use code_point_buffer::*;
#[doc(inline)]
pub use gram_cursor::*;
