//! # Gram Configuration
//!
//! [`GramConfig`] describes a gram tokenizer:
//! * `min_gram` / `max_gram` - the gram size range, in code points.
//! * `edges_only` - only emit grams anchored at the start of each unit.
//! * `engine` - the [`EngineVersion`] implementing it.
//!
//! Most users will build a [`GramConfig`] and call [`GramConfig::build`].

mod engine_version;
mod gram_config;
mod side;

#[doc(inline)]
pub use engine_version::*;
#[doc(inline)]
pub use gram_config::*;
#[doc(inline)]
pub use side::*;
