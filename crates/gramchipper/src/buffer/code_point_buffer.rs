//! # Code Point Buffer

use core::ops::Range;
use std::io;

use crate::buffer::GramCursor;
use crate::source::{CharSource, read_fully};

/// Extra code points read past the largest gram, to avoid polling the
/// source for every gram.
pub const READ_AHEAD: usize = 1024;

/// The largest `max_gram` whose window capacity is addressable.
pub const MAX_GRAM_SIZE: usize = (isize::MAX as usize - READ_AHEAD) / 2;

/// A slide-and-refill window of decoded code points over a [`CharSource`].
///
/// The unconsumed slice is `[start, end)`. The window holds at most
/// `2 * max_gram + READ_AHEAD` code points, enough for a full max-length
/// gram of surrogate pairs plus read-ahead; storage grows only as the
/// source delivers text.
///
/// Unpaired surrogates decode to `U+FFFD`, which keeps their width of one
/// unit, so stream offsets stay aligned with the source.
#[derive(Debug, Clone)]
pub struct CodePointBuffer {
    points: Vec<char>,
    units: Vec<u16>,
    pending_high: Option<u16>,
    start: usize,
    capacity: usize,
    lookahead: usize,
    exhausted: bool,
}

impl CodePointBuffer {
    /// Build a buffer for grams of at most `max_gram` code points.
    ///
    /// `max_gram` is clamped to [`MAX_GRAM_SIZE`]; callers validate it with
    /// [`crate::errors::check_gram_range`].
    ///
    /// The buffer starts in the reset state.
    pub fn new(max_gram: usize) -> Self {
        let max_gram = max_gram.min(MAX_GRAM_SIZE);
        Self {
            points: Vec::new(),
            units: vec![0; READ_AHEAD],
            pending_high: None,
            start: 0,
            capacity: 2 * max_gram + READ_AHEAD,
            lookahead: max_gram,
            exhausted: false,
        }
    }

    /// Return to the initial, empty, state.
    ///
    /// The next [`Self::ensure_window`] fills.
    pub fn reset(&mut self) {
        self.points.clear();
        self.start = 0;
        self.pending_high = None;
        self.exhausted = false;
    }

    /// The window capacity, in code points.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Start of the unconsumed slice.
    pub fn start(&self) -> usize {
        self.start
    }

    /// End of the unconsumed slice.
    pub fn end(&self) -> usize {
        self.points.len()
    }

    /// Number of unconsumed code points.
    pub fn len(&self) -> usize {
        self.points.len() - self.start
    }

    /// Is the unconsumed slice empty?
    pub fn is_empty(&self) -> bool {
        self.start == self.points.len()
    }

    /// Has the source reported end of stream?
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// The code point at buffer index `idx`.
    pub fn get(
        &self,
        idx: usize,
    ) -> char {
        self.points[idx]
    }

    /// The code points in `range`.
    pub fn slice(
        &self,
        range: Range<usize>,
    ) -> &[char] {
        &self.points[range]
    }

    /// UTF-16 width of the code points in `range`.
    pub fn utf16_width(
        &self,
        range: Range<usize>,
    ) -> usize {
        self.points[range].iter().map(|c| c.len_utf16()).sum()
    }

    /// Compact and refill when fewer than `max_gram + 1` code points remain.
    ///
    /// Compaction shifts `[start, end)` to index 0, and shifts the cursor's
    /// memoized indices by the same delta.
    pub fn ensure_window<S: CharSource + ?Sized>(
        &mut self,
        source: &mut S,
        cursor: &mut GramCursor,
    ) -> io::Result<()> {
        if self.exhausted || self.start + self.lookahead + 1 < self.points.len() {
            return Ok(());
        }

        let delta = self.start;
        self.points.drain(..delta);
        self.start = 0;
        cursor.shift(delta);

        self.fill(source)
    }

    /// Read into the free tail in `READ_AHEAD` chunks, decoding surrogate pairs.
    fn fill<S: CharSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> io::Result<()> {
        while !self.exhausted {
            let free = self.capacity - self.points.len();
            let carried = usize::from(self.pending_high.is_some());
            let want = free.min(READ_AHEAD);
            if want <= carried {
                break;
            }

            if let Some(high) = self.pending_high.take() {
                self.units[0] = high;
            }
            let requested = want - carried;
            let read = read_fully(source, &mut self.units[carried..want])?;
            self.exhausted = read < requested;

            let total = carried + read;
            let mut decoded = total;
            if !self.exhausted
                && total > 0
                && is_high_surrogate(self.units[total - 1])
            {
                self.pending_high = Some(self.units[total - 1]);
                decoded -= 1;
            }

            self.points.extend(
                char::decode_utf16(self.units[..decoded].iter().copied()).map(|c| {
                    c.unwrap_or_else(|e| {
                        log::trace!("unpaired surrogate {:#06x}", e.unpaired_surrogate());
                        char::REPLACEMENT_CHARACTER
                    })
                }),
            );
        }

        if self.exhausted {
            log::debug!("source exhausted; {} code points buffered", self.len());
        }
        Ok(())
    }

    /// Consume one code point, advancing the cursor's stream offset by its
    /// UTF-16 width.
    pub fn consume(
        &mut self,
        cursor: &mut GramCursor,
    ) {
        debug_assert!(self.start < self.points.len());
        cursor.advance(self.points[self.start].len_utf16());
        self.start += 1;
    }
}

fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..0xDC00).contains(&unit)
}
