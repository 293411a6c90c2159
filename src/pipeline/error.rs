//! Error types for table construction and scale-and-filter selection.

use thiserror::Error;

/// Errors raised by the numeric core.
///
/// Constant columns are not an error: they are scaled to a fixed value and
/// reported through [`crate::pipeline::ColumnVariance::degenerate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectError {
    /// Malformed call parameters: negative threshold, zero columns,
    /// ragged or duplicate columns, or values that are not finite numbers.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The table has no rows, so min/max and variance are undefined.
    #[error("table has zero rows")]
    EmptyTable,
}

impl SelectError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        SelectError::InvalidInput(message.into())
    }
}

/// Result alias for the numeric core.
pub type SelectResult<T> = std::result::Result<T, SelectError>;
