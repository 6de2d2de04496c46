use shamir_math::error::MathError;
use thiserror::Error;

/// Result type specialized for secret sharing operations.
pub type ShamirResult<T> = std::result::Result<T, ShamirError>;

/// Errors returned by [`split`](crate::split) and [`combine`](crate::combine).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShamirError {
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] ParameterError),
    #[error("insufficient shares: need at least {required}, got {provided}")]
    InsufficientShares { required: usize, provided: usize },
    #[error("invalid shares: {0}")]
    InvalidShares(#[from] ShareError),
    #[error("duplicate share for x-coordinate {0}")]
    DuplicateShare(u8),
    #[error(transparent)]
    Math(#[from] MathError),
}

/// The split constraint that was violated.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("parts ({parts}) cannot be less than threshold ({threshold})")]
    PartsBelowThreshold { parts: usize, threshold: usize },
    #[error("parts ({0}) cannot exceed 255")]
    TooManyParts(usize),
    #[error("threshold ({0}) must be at least 2")]
    ThresholdTooSmall(usize),
    #[error("threshold ({0}) cannot exceed 255")]
    ThresholdTooLarge(usize),
    #[error("cannot split an empty secret")]
    EmptySecret,
}

/// Why a set of shares cannot be combined.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("shares must be at least two bytes, got {0}")]
    TooShort(usize),
    #[error("share {index} has length {found} but expected {expected}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
}
