//! Error types for the loss-landscape engine.
//!
//! Every failure here is an input-validation failure detected at the
//! boundary of an operation. Nothing is retried and nothing is turned into
//! a sentinel value.

/// Errors produced while generating data or evaluating the error landscape.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Bad generation or slider arguments (zero samples, negative noise, NaN input).
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Malformed grid bounds or β sample sequence.
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// A metric or projection was requested on a dataset with no points.
    #[error("Dataset contains no points")]
    EmptyDataset,

    /// Finite inputs produced a NaN or infinite result (e.g. the sum of
    /// squared residuals overflowed).
    #[error("Result is not finite: {0}")]
    NonFiniteResult(String),

    /// Dataset columns were supplied with differing lengths.
    #[error("Dataset columns must have equal length [x1: {x1}, x2: {x2}, y: {y}]")]
    LengthMismatch {
        /// Length of the first predictor column
        x1: usize,
        /// Length of the second predictor column
        x2: usize,
        /// Length of the response column
        y: usize,
    },
}

/// Result type for the loss-landscape engine
pub type Result<T> = std::result::Result<T, Error>;
