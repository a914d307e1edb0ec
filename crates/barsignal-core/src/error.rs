//! Error types for indicator computation.
//!
//! Only configuration and shape problems are errors. Numeric edge conditions
//! (division by zero, zero-range windows) resolve to NaN or infinity inside the
//! output series, and warm-up positions are NaN; neither is reported here.

use thiserror::Error;

/// Result type alias for indicator operations that may fail.
pub type Result<T> = core::result::Result<T, IndicatorError>;

/// Errors that can occur during indicator computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    /// Not enough data points to compute anything at all.
    #[error("Insufficient data: need {required} points, got {actual}")]
    InsufficientData {
        /// Required number of data points.
        required: usize,
        /// Actual number of data points provided.
        actual: usize,
    },

    /// Invalid window, period or span.
    #[error("Invalid window size: {0} (must be > 0)")]
    InvalidWindow(usize),

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {value} (expected {expected})")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Provided value as string.
        value: String,
        /// Description of expected value.
        expected: &'static str,
    },

    /// Series length mismatch.
    #[error("Series length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// Two named outputs collided while being combined into one frame.
    #[error("Duplicate column: '{0}'")]
    DuplicateColumn(String),
}

impl IndicatorError {
    /// Create an [`IndicatorError::InvalidParameter`] from any displayable value.
    #[must_use]
    pub fn invalid_parameter(
        name: &'static str,
        value: impl core::fmt::Display,
        expected: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            expected,
        }
    }
}
