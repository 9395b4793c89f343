//! # Token Character Predicates

use std::sync::Arc;

/// Decides which code points may appear inside a token or gram.
///
/// Any `Fn(char) -> bool` closure is a predicate.
pub trait TokenCharPredicate: Send + Sync {
    /// Is `c` a token character?
    fn is_token_char(
        &self,
        c: char,
    ) -> bool;
}

impl<F> TokenCharPredicate for F
where
    F: Fn(char) -> bool + Send + Sync,
{
    fn is_token_char(
        &self,
        c: char,
    ) -> bool {
        self(c)
    }
}

/// Accepts every code point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AcceptAll;

impl TokenCharPredicate for AcceptAll {
    fn is_token_char(
        &self,
        _c: char,
    ) -> bool {
        true
    }
}

/// Rejects Unicode whitespace.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NonWhitespace;

impl TokenCharPredicate for NonWhitespace {
    fn is_token_char(
        &self,
        c: char,
    ) -> bool {
        !c.is_whitespace()
    }
}

/// Accepts alphabetic and numeric code points.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LetterOrDigit;

impl TokenCharPredicate for LetterOrDigit {
    fn is_token_char(
        &self,
        c: char,
    ) -> bool {
        c.is_alphanumeric()
    }
}

/// Shared predicate handle.
pub type SharedPredicate = Arc<dyn TokenCharPredicate>;

/// The default [`SharedPredicate`]: [`AcceptAll`].
pub fn accept_all() -> SharedPredicate {
    Arc::new(AcceptAll)
}
