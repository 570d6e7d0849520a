use thiserror::Error;

/// Errors from building a correlation matrix.
///
/// Malformed values and undefined coefficients never surface here: they
/// degrade to missing values and `0.0` entries respectively.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CorrelationError {
    /// Fewer than [`MIN_COMPLETE_ROWS`](crate::sufficiency::MIN_COMPLETE_ROWS)
    /// rows have a value in every column.
    #[error(
        "Not enough data to compute the correlation matrix: at least 2 observations \
         with complete data across all indicators are required"
    )]
    InsufficientData,
}
