//! # Legacy Edge N-Gram Tokenizer

use crate::analysis::{SourceSlot, TokenAttributes, TokenStream, Tokenizer};
use crate::config::{Side, edge_range};
use crate::errors::{GCResult, check_gram_range};
use crate::legacy::{LEGACY_READ_LIMIT, WholeInput};
use crate::source::CharSource;

/// Whole-buffer edge n-gram tokenizer, kept for historical output.
///
/// Reads at most `max_gram` units for [`Side::Front`], or
/// [`LEGACY_READ_LIMIT`] for [`Side::Back`], trims them, and emits the
/// prefixes (or suffixes) of sizes `min_gram..=max_gram`.
pub struct LegacyEdgeNGramTokenizer {
    side: Side,
    min_gram: usize,
    max_gram: usize,

    input: SourceSlot,
    attrs: TokenAttributes,

    whole: Option<WholeInput>,
    gram_size: usize,
}

impl LegacyEdgeNGramTokenizer {
    /// Build a tokenizer anchored on `side`, over `[min_gram, max_gram]`.
    pub fn new(
        side: Side,
        min_gram: usize,
        max_gram: usize,
    ) -> GCResult<Self> {
        check_gram_range(min_gram, max_gram)?;
        log::debug!("legacy {side} edge n-gram tokenizer: [{min_gram}, {max_gram}]");

        Ok(Self {
            side,
            min_gram,
            max_gram,
            input: SourceSlot::default(),
            attrs: TokenAttributes::default(),
            whole: None,
            gram_size: min_gram,
        })
    }

    /// Get the edge side.
    pub fn side(&self) -> Side {
        self.side
    }

    /// The read cap for this side.
    fn read_limit(&self) -> usize {
        match self.side {
            Side::Front => self.max_gram,
            Side::Back => LEGACY_READ_LIMIT,
        }
    }
}

impl TokenStream for LegacyEdgeNGramTokenizer {
    fn reset(&mut self) -> GCResult<()> {
        self.input.begin()?;
        self.attrs.clear();
        self.whole = None;
        self.gram_size = self.min_gram;
        Ok(())
    }

    fn increment_token(&mut self) -> GCResult<bool> {
        let limit = self.read_limit();
        let source = self.input.streaming_source()?;
        self.attrs.clear();

        let whole = match &mut self.whole {
            Some(whole) => {
                self.attrs.position_increment = 0;
                whole
            }
            slot @ None => {
                let whole = slot.insert(WholeInput::read(source, limit)?);
                if whole.is_empty() {
                    return Ok(false);
                }
                self.attrs.position_increment = 1;
                whole
            }
        };

        let len = whole.len();
        if self.gram_size > self.max_gram || self.gram_size > len {
            return Ok(false);
        }

        let range = edge_range(self.side, len, self.gram_size);
        self.attrs.term = whole.text(range.start, range.end);
        self.attrs.set_offsets(range.start, range.end);

        self.gram_size += 1;
        Ok(true)
    }

    fn end(&mut self) -> GCResult<()> {
        self.input.finish()?;

        let final_offset = self.whole.as_ref().map_or(0, |w| w.units_read);
        self.attrs.clear();
        self.attrs.set_offsets(final_offset, final_offset);
        self.attrs.position_increment = 0;
        Ok(())
    }

    fn attributes(&self) -> &TokenAttributes {
        &self.attrs
    }
}

impl Tokenizer for LegacyEdgeNGramTokenizer {
    fn set_source(
        &mut self,
        source: Box<dyn CharSource>,
    ) {
        self.input.attach(source);
    }
}
