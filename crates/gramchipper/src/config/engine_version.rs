//! # Engine Version

/// Selects the gram engine implementation.
///
/// Chosen once, at construction; see [`GramTokenizer`](crate::tokenizers::GramTokenizer).
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
pub enum EngineVersion {
    /// The streaming engine.
    ///
    /// Grams are ordered by start offset, then length; offsets are exact
    /// and surrogate pairs are never split.
    #[default]
    Streaming,

    /// The whole-buffer engine.
    ///
    /// Reads at most 1024 units, trims the input, and emits grams ordered
    /// by length, then position. Its output is kept as-is for callers
    /// pinned to historical behavior.
    Legacy,
}

impl EngineVersion {
    /// Is this the legacy engine?
    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy)
    }
}
