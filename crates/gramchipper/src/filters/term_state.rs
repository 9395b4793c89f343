//! # Captured Upstream Terms

use core::ops::Range;

use crate::analysis::TokenAttributes;

/// An upstream token captured once, then sliced into grams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermState {
    chars: Vec<char>,

    /// `widths[i]` is the UTF-16 width of `chars[..i]`.
    widths: Vec<usize>,

    start_offset: usize,
    end_offset: usize,
    position_length: usize,

    /// Do the offsets span exactly the term text?
    precise_offsets: bool,
}

impl TermState {
    /// Capture the term, offsets, and position length of `attrs`.
    ///
    /// Offsets are trusted only when they span exactly the UTF-16 length of
    /// the term; a synonym, for example, keeps the offsets of the text it
    /// replaced.
    pub fn capture(attrs: &TokenAttributes) -> Self {
        let chars: Vec<char> = attrs.term.chars().collect();

        let mut widths = Vec::with_capacity(chars.len() + 1);
        widths.push(0);
        let mut width = 0;
        for c in &chars {
            width += c.len_utf16();
            widths.push(width);
        }

        let precise_offsets = attrs.start_offset + width == attrs.end_offset;
        if !precise_offsets {
            log::trace!(
                "term {:?} does not span offsets [{}, {}); keeping token offsets",
                attrs.term,
                attrs.start_offset,
                attrs.end_offset
            );
        }

        Self {
            chars,
            widths,
            start_offset: attrs.start_offset,
            end_offset: attrs.end_offset,
            position_length: attrs.position_length,
            precise_offsets,
        }
    }

    /// Length of the term, in code points.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Is the term empty?
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Do the token offsets span exactly the term text?
    pub fn has_precise_offsets(&self) -> bool {
        self.precise_offsets
    }

    /// Write the gram over code points `range` into `attrs`.
    ///
    /// Sets the term, offsets, and position length; the caller owns the
    /// position increment.
    pub fn write_gram(
        &self,
        range: Range<usize>,
        attrs: &mut TokenAttributes,
    ) {
        if self.precise_offsets {
            attrs.set_offsets(
                self.start_offset + self.widths[range.start],
                self.start_offset + self.widths[range.end],
            );
        } else {
            attrs.set_offsets(self.start_offset, self.end_offset);
        }
        attrs.set_term_chars(&self.chars[range]);
        attrs.position_length = self.position_length;
    }
}
