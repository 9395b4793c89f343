//! # Gram Configuration

use core::fmt;
use std::sync::Arc;

use crate::analysis::{SharedPredicate, TokenCharPredicate};
use crate::config::{EngineVersion, Side};
use crate::errors::{GCResult, GramchipperError, check_gram_range};
use crate::tokenizers::GramTokenizer;

/// Default minimum gram size.
pub const DEFAULT_MIN_GRAM: usize = 1;

/// Default maximum gram size for all-gram tokenizers.
pub const DEFAULT_MAX_GRAM: usize = 2;

/// Default maximum gram size for edge-gram tokenizers.
pub const DEFAULT_EDGE_MAX_GRAM: usize = 1;

/// Description of a gram tokenizer.
///
/// Values are checked by [`Self::validate`], which [`Self::build`] calls.
///
/// ## Style Hints
///
/// Instance names should prefer `gram_config`,
/// or `config` when there is no ambiguity.
#[derive(Clone)]
pub struct GramConfig {
    min_gram: usize,
    max_gram: usize,
    edges_only: bool,
    side: Side,
    engine: EngineVersion,

    /// `None` accepts every code point.
    predicate: Option<SharedPredicate>,
}

impl Default for GramConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_GRAM, DEFAULT_MAX_GRAM)
    }
}

impl fmt::Debug for GramConfig {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("GramConfig")
            .field("min_gram", &self.min_gram)
            .field("max_gram", &self.max_gram)
            .field("edges_only", &self.edges_only)
            .field("side", &self.side)
            .field("engine", &self.engine)
            .field("predicate", &self.predicate.as_ref().map(|_| ".."))
            .finish()
    }
}

impl GramConfig {
    /// An all-grams streaming config over `[min_gram, max_gram]`.
    pub fn new(
        min_gram: usize,
        max_gram: usize,
    ) -> Self {
        Self {
            min_gram,
            max_gram,
            edges_only: false,
            side: Side::Front,
            engine: EngineVersion::Streaming,
            predicate: None,
        }
    }

    /// A front edge-grams streaming config over `[min_gram, max_gram]`.
    pub fn edge(
        min_gram: usize,
        max_gram: usize,
    ) -> Self {
        Self::new(min_gram, max_gram).with_edges_only(true)
    }

    /// Get the minimum gram size.
    pub fn min_gram(&self) -> usize {
        self.min_gram
    }

    /// Get the maximum gram size.
    pub fn max_gram(&self) -> usize {
        self.max_gram
    }

    /// Set the gram size range.
    pub fn set_gram_range(
        &mut self,
        min_gram: usize,
        max_gram: usize,
    ) {
        self.min_gram = min_gram;
        self.max_gram = max_gram;
    }

    /// Set the gram size range.
    pub fn with_gram_range(
        mut self,
        min_gram: usize,
        max_gram: usize,
    ) -> Self {
        self.set_gram_range(min_gram, max_gram);
        self
    }

    /// Are grams restricted to unit edges?
    pub fn edges_only(&self) -> bool {
        self.edges_only
    }

    /// Restrict grams to unit edges.
    pub fn set_edges_only(
        &mut self,
        edges_only: bool,
    ) {
        self.edges_only = edges_only;
    }

    /// Restrict grams to unit edges.
    pub fn with_edges_only(
        mut self,
        edges_only: bool,
    ) -> Self {
        self.set_edges_only(edges_only);
        self
    }

    /// Get the edge side.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Set the edge side.
    ///
    /// [`Side::Back`] is only supported by [`EngineVersion::Legacy`].
    pub fn set_side(
        &mut self,
        side: Side,
    ) {
        self.side = side;
    }

    /// Set the edge side.
    pub fn with_side(
        mut self,
        side: Side,
    ) -> Self {
        self.set_side(side);
        self
    }

    /// Get the engine version.
    pub fn engine(&self) -> EngineVersion {
        self.engine
    }

    /// Set the engine version.
    pub fn set_engine(
        &mut self,
        engine: EngineVersion,
    ) {
        self.engine = engine;
    }

    /// Set the engine version.
    pub fn with_engine(
        mut self,
        engine: EngineVersion,
    ) -> Self {
        self.set_engine(engine);
        self
    }

    /// Get the token char predicate, if any.
    pub fn predicate(&self) -> Option<&SharedPredicate> {
        self.predicate.as_ref()
    }

    /// Set the token char predicate.
    ///
    /// Only the streaming engine consults it.
    pub fn with_predicate<P>(
        mut self,
        predicate: P,
    ) -> Self
    where
        P: TokenCharPredicate + 'static,
    {
        self.predicate = Some(Arc::new(predicate));
        self
    }

    /// Set a shared token char predicate.
    pub fn with_shared_predicate(
        mut self,
        predicate: SharedPredicate,
    ) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Check the config.
    ///
    /// ## Errors
    /// * [`GramchipperError::InvalidConfiguration`] - unless `1 <= min_gram <= max_gram`.
    /// * [`GramchipperError::UnsupportedConfiguration`] - for back edges on the
    ///   streaming engine, or a predicate on the legacy engine.
    pub fn validate(&self) -> GCResult<()> {
        check_gram_range(self.min_gram, self.max_gram)?;

        if self.side == Side::Back && !(self.engine.is_legacy() && self.edges_only) {
            return Err(GramchipperError::UnsupportedConfiguration(format!(
                "side {} requires the legacy engine with edges only",
                self.side
            )));
        }

        if self.engine.is_legacy() && self.predicate.is_some() {
            return Err(GramchipperError::UnsupportedConfiguration(
                "the legacy engine does not support token char predicates".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate and build the configured [`GramTokenizer`].
    pub fn build(&self) -> GCResult<GramTokenizer> {
        GramTokenizer::from_config(self)
    }
}
