//! Byte-wise Shamir secret sharing over GF(2^8).
//!
//! Every secret byte becomes the intercept of its own random polynomial of
//! degree `threshold - 1`. Each share holds that polynomial family evaluated
//! at one non-zero x-coordinate, with the coordinate appended as a final
//! byte, so shares can be recombined without any side information.

mod accumulator;
mod combine;
mod share;
mod split;

pub use combine::combine;
pub use share::{Share, MIN_SHARE_LEN};
pub use split::{split, split_with_params, split_with_rng};
