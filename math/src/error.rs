use std::num::ParseIntError;

use thiserror::Error;

pub mod interpolation {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error(
            "sample sets differ in length: {x_len} x-samples but {y_len} y-samples"
        )]
        LengthMismatch { x_len: usize, y_len: usize },
    }
}

pub use interpolation::Error as InterpolationError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    ParseFieldElement(#[from] ParseFieldElementError),
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
    #[error("randomness source failed: {0}")]
    Randomness(String),
}

pub type Error = MathError;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum ParseFieldElementError {
    #[error("invalid field element literal")]
    ParseU8Error(#[source] ParseIntError),
}
