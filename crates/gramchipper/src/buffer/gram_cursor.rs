//! # Gram Cursor

use crate::analysis::TokenCharPredicate;
use crate::buffer::CodePointBuffer;

/// Position bookkeeping for the gram under construction.
///
/// Indices are buffer indices; they are signed because they may sit one
/// slot before the window start, and go negative when the buffer compacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GramCursor {
    /// UTF-16 units consumed from the source so far.
    stream_offset: usize,

    /// Code point length of the next candidate gram.
    gram_size: usize,

    /// Right-most buffer index already tested against the predicate.
    last_checked: isize,

    /// Right-most buffer index found to hold a non-token character.
    last_rejected: isize,
}

impl GramCursor {
    /// Build a cursor in its initial state.
    pub fn new(min_gram: usize) -> Self {
        Self {
            stream_offset: 0,
            gram_size: min_gram,
            last_checked: -1,
            last_rejected: -1,
        }
    }

    /// Return to the initial state for a window starting at `start`.
    pub fn reset(
        &mut self,
        min_gram: usize,
        start: usize,
    ) {
        self.stream_offset = 0;
        self.gram_size = min_gram;
        self.last_checked = start as isize - 1;
        self.last_rejected = start as isize - 1;
    }

    /// UTF-16 units consumed from the source so far.
    pub fn stream_offset(&self) -> usize {
        self.stream_offset
    }

    /// Code point length of the next candidate gram.
    pub fn gram_size(&self) -> usize {
        self.gram_size
    }

    /// Set the candidate gram length.
    pub fn set_gram_size(
        &mut self,
        gram_size: usize,
    ) {
        self.gram_size = gram_size;
    }

    /// Grow the candidate gram by one code point.
    pub fn grow(&mut self) {
        self.gram_size += 1;
    }

    /// Record `width` consumed UTF-16 units.
    pub(crate) fn advance(
        &mut self,
        width: usize,
    ) {
        self.stream_offset += width;
    }

    /// Shift the memoized indices down by `delta` after compaction.
    pub(crate) fn shift(
        &mut self,
        delta: usize,
    ) {
        self.last_checked -= delta as isize;
        self.last_rejected -= delta as isize;
    }

    /// Test the not-yet-checked code points of the candidate gram.
    ///
    /// Scans right-to-left from the candidate's last index down to the
    /// last checked one, keeping the right-most rejection.
    pub fn scan_rejections(
        &mut self,
        buffer: &CodePointBuffer,
        predicate: &dyn TokenCharPredicate,
    ) {
        let term_end = (buffer.start() + self.gram_size) as isize - 1;
        if term_end <= self.last_checked {
            return;
        }
        let mut idx = term_end;
        while idx > self.last_checked {
            if !predicate.is_token_char(buffer.get(idx as usize)) {
                self.last_rejected = idx;
                break;
            }
            idx -= 1;
        }
        self.last_checked = term_end;
    }

    /// Does the candidate gram at `start` contain a rejected code point?
    pub fn gram_contains_rejection(
        &self,
        start: usize,
    ) -> bool {
        let start = start as isize;
        self.last_rejected >= start && self.last_rejected < start + self.gram_size as isize
    }

    /// Is `start` preceded by a rejected code point (or the stream start)?
    pub fn at_edge(
        &self,
        start: usize,
    ) -> bool {
        self.last_rejected == start as isize - 1
    }
}
