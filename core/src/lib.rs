//! Threshold secret sharing: split a secret into `n` shares so that any
//! `t` of them recover it and fewer reveal nothing.
//!
//! ```
//! use shamir_core::{combine, split};
//!
//! let shares = split(b"attack at dawn", 5, 3).unwrap();
//! let secret = combine(&shares[1..4]).unwrap();
//! assert_eq!(secret, b"attack at dawn");
//! ```

pub mod error;
pub mod params;
pub mod shamir;

pub use crate::{
    error::{ParameterError, ShamirError, ShamirResult, ShareError},
    params::{SplitParams, SHARE_OVERHEAD},
    shamir::{combine, split, split_with_params, split_with_rng, Share},
};
pub use shamir_math::RandomSource;
