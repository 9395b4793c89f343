//! # Engine Selection

use crate::analysis::{TokenAttributes, TokenStream, Tokenizer};
use crate::config::{EngineVersion, GramConfig};
use crate::errors::GCResult;
use crate::legacy::{LegacyEdgeNGramTokenizer, LegacyNGramTokenizer};
use crate::source::CharSource;
use crate::tokenizers::NGramTokenizer;

/// A gram tokenizer, with its engine chosen once from a [`GramConfig`].
///
/// Each variant is an independent [`Tokenizer`] implementation.
pub enum GramTokenizer {
    /// The streaming engine, for all grams or edge grams.
    Streaming(NGramTokenizer),

    /// The legacy whole-buffer all-grams engine.
    Legacy(LegacyNGramTokenizer),

    /// The legacy whole-buffer edge-grams engine.
    LegacyEdge(LegacyEdgeNGramTokenizer),
}

impl GramTokenizer {
    /// Validate `config` and build its tokenizer.
    pub fn from_config(config: &GramConfig) -> GCResult<Self> {
        config.validate()?;
        log::debug!("building gram tokenizer: {config:?}");

        Ok(match (config.engine(), config.edges_only()) {
            (EngineVersion::Streaming, _) => Self::Streaming(NGramTokenizer::from_config(config)?),
            (EngineVersion::Legacy, false) => Self::Legacy(LegacyNGramTokenizer::new(
                config.min_gram(),
                config.max_gram(),
            )?),
            (EngineVersion::Legacy, true) => Self::LegacyEdge(LegacyEdgeNGramTokenizer::new(
                config.side(),
                config.min_gram(),
                config.max_gram(),
            )?),
        })
    }

    /// The engine version of this tokenizer.
    pub fn engine(&self) -> EngineVersion {
        match self {
            Self::Streaming(_) => EngineVersion::Streaming,
            Self::Legacy(_) | Self::LegacyEdge(_) => EngineVersion::Legacy,
        }
    }

    fn as_tokenizer(&self) -> &dyn Tokenizer {
        match self {
            Self::Streaming(t) => t,
            Self::Legacy(t) => t,
            Self::LegacyEdge(t) => t,
        }
    }

    fn as_tokenizer_mut(&mut self) -> &mut dyn Tokenizer {
        match self {
            Self::Streaming(t) => t,
            Self::Legacy(t) => t,
            Self::LegacyEdge(t) => t,
        }
    }
}

impl TokenStream for GramTokenizer {
    fn reset(&mut self) -> GCResult<()> {
        self.as_tokenizer_mut().reset()
    }

    fn increment_token(&mut self) -> GCResult<bool> {
        self.as_tokenizer_mut().increment_token()
    }

    fn end(&mut self) -> GCResult<()> {
        self.as_tokenizer_mut().end()
    }

    fn attributes(&self) -> &TokenAttributes {
        self.as_tokenizer().attributes()
    }
}

impl Tokenizer for GramTokenizer {
    fn set_source(
        &mut self,
        source: Box<dyn CharSource>,
    ) {
        self.as_tokenizer_mut().set_source(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{NonWhitespace, analyze};
    use crate::config::Side;
    use crate::source::Utf16Source;

    #[test]
    fn test_engine_selection() {
        let cases = [
            (GramConfig::new(1, 2), "Streaming"),
            (GramConfig::edge(1, 2), "Streaming"),
            (
                GramConfig::new(1, 2).with_engine(EngineVersion::Legacy),
                "Legacy",
            ),
            (
                GramConfig::edge(1, 2)
                    .with_engine(EngineVersion::Legacy)
                    .with_side(Side::Back),
                "LegacyEdge",
            ),
        ];
        for (config, expected) in cases {
            let tokenizer = config.build().unwrap();
            let name = match tokenizer {
                GramTokenizer::Streaming(_) => "Streaming",
                GramTokenizer::Legacy(_) => "Legacy",
                GramTokenizer::LegacyEdge(_) => "LegacyEdge",
            };
            assert_eq!(name, expected);
        }
    }

    #[test]
    fn test_engines_disagree_on_order() {
        let mut streaming = GramConfig::new(1, 2).build().unwrap();
        let mut legacy = GramConfig::new(1, 2)
            .with_engine(EngineVersion::Legacy)
            .build()
            .unwrap();
        assert_eq!(legacy.engine(), EngineVersion::Legacy);

        let a = analyze(&mut streaming, Utf16Source::from("abc")).unwrap();
        let b = analyze(&mut legacy, Utf16Source::from("abc")).unwrap();
        assert_eq!(a.terms(), vec!["a", "ab", "b", "bc", "c"]);
        assert_eq!(b.terms(), vec!["a", "b", "c", "ab", "bc"]);
        assert_eq!(a.final_offset, b.final_offset);
    }

    #[test]
    fn test_streaming_edges_with_predicate() {
        let mut tokenizer = GramConfig::edge(2, 2)
            .with_predicate(NonWhitespace)
            .build()
            .unwrap();
        let analysis = analyze(&mut tokenizer, Utf16Source::from("ab cd e")).unwrap();
        assert_eq!(analysis.terms(), vec!["ab", "cd"]);
        assert_eq!(analysis.final_offset, 7);
    }
}
