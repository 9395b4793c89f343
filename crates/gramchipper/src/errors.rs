//! # Error Types

use crate::buffer::MAX_GRAM_SIZE;

/// Errors from gramchipper operations.
#[derive(Debug, thiserror::Error)]
pub enum GramchipperError {
    /// The gram size range is empty, starts below 1, or exceeds [`MAX_GRAM_SIZE`].
    #[error(
        "invalid gram range: min_gram ({min_gram}) must be >= 1 and <= max_gram ({max_gram}) <= {limit}",
        limit = MAX_GRAM_SIZE
    )]
    InvalidConfiguration {
        /// The requested minimum gram size.
        min_gram: usize,

        /// The requested maximum gram size.
        max_gram: usize,
    },

    /// The requested mode was removed, or never existed for this engine.
    #[error("unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    /// The token stream protocol was violated by the caller.
    #[error("illegal state: {0}")]
    IllegalState(String),

    /// I/O error from the underlying character source.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for gramchipper operations.
pub type GCResult<T> = core::result::Result<T, GramchipperError>;

/// Validate a `[min_gram, max_gram]` range.
///
/// ## Returns
/// `Ok(())` when `1 <= min_gram <= max_gram <= MAX_GRAM_SIZE`.
pub fn check_gram_range(
    min_gram: usize,
    max_gram: usize,
) -> GCResult<()> {
    if min_gram < 1 || min_gram > max_gram || max_gram > MAX_GRAM_SIZE {
        return Err(GramchipperError::InvalidConfiguration { min_gram, max_gram });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_gram_range() {
        assert!(check_gram_range(1, 1).is_ok());
        assert!(check_gram_range(2, 5).is_ok());

        assert!(matches!(
            check_gram_range(0, 2),
            Err(GramchipperError::InvalidConfiguration {
                min_gram: 0,
                max_gram: 2
            })
        ));
        assert!(matches!(
            check_gram_range(2, 1),
            Err(GramchipperError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_check_gram_range_upper_bound() {
        assert!(check_gram_range(1, MAX_GRAM_SIZE).is_ok());
        assert!(matches!(
            check_gram_range(1, MAX_GRAM_SIZE + 1),
            Err(GramchipperError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            check_gram_range(1, usize::MAX),
            Err(GramchipperError::InvalidConfiguration {
                min_gram: 1,
                max_gram: usize::MAX
            })
        ));
    }

    #[test]
    fn test_error_display() {
        let err = GramchipperError::InvalidConfiguration {
            min_gram: 2,
            max_gram: 1,
        };
        assert_eq!(
            err.to_string(),
            format!(
                "invalid gram range: min_gram (2) must be >= 1 and <= max_gram (1) <= {MAX_GRAM_SIZE}"
            )
        );

        let err: GramchipperError = std::io::Error::other("boom").into();
        assert!(matches!(err, GramchipperError::Io(_)));
        assert_eq!(err.to_string(), "boom");
    }
}
