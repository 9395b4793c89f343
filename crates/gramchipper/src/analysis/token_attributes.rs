//! # Token Attributes

use core::fmt;

/// The per-token attribute slots written by a [`TokenStream`](crate::analysis::TokenStream).
///
/// Slots are valid after a successful `increment_token()`, until the next
/// call; after `end()`, only the offsets are meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenAttributes {
    /// The term text.
    pub term: String,

    /// Start offset, in UTF-16 units of the original input.
    pub start_offset: usize,

    /// End offset (exclusive), in UTF-16 units of the original input.
    pub end_offset: usize,

    /// Position delta from the previous token.
    pub position_increment: usize,

    /// Number of positions spanned by the token.
    pub position_length: usize,
}

impl Default for TokenAttributes {
    fn default() -> Self {
        Self {
            term: String::new(),
            start_offset: 0,
            end_offset: 0,
            position_increment: 1,
            position_length: 1,
        }
    }
}

impl TokenAttributes {
    /// Reset all slots to defaults, keeping the term allocation.
    pub fn clear(&mut self) {
        self.term.clear();
        self.start_offset = 0;
        self.end_offset = 0;
        self.position_increment = 1;
        self.position_length = 1;
    }

    /// Set both offsets.
    pub fn set_offsets(
        &mut self,
        start_offset: usize,
        end_offset: usize,
    ) {
        self.start_offset = start_offset;
        self.end_offset = end_offset;
    }

    /// Replace the term with the given code points.
    pub fn set_term_chars(
        &mut self,
        chars: &[char],
    ) {
        self.term.clear();
        self.term.extend(chars.iter());
    }

    /// Replace the term with the given text.
    pub fn set_term(
        &mut self,
        text: &str,
    ) {
        self.term.clear();
        self.term.push_str(text);
    }
}

impl fmt::Display for TokenAttributes {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{}[{},{})",
            self.term, self.start_offset, self.end_offset
        )
    }
}
