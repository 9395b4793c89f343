//! # Edge Side

use core::ops::Range;

/// Which edge of a unit an edge gram is anchored to.
///
/// Only the legacy engine supports [`Side::Back`].
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    /// Grams are prefixes.
    #[default]
    Front,

    /// Grams are suffixes.
    Back,
}

/// The range of a `size` gram anchored on `side` of a `len` unit.
///
/// Requires `size <= len`.
pub fn edge_range(
    side: Side,
    len: usize,
    size: usize,
) -> Range<usize> {
    debug_assert!(size <= len);
    match side {
        Side::Front => 0..size,
        Side::Back => len - size..len,
    }
}
