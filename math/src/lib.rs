//! Arithmetic over GF(2^8): field elements, polynomials with a secret
//! intercept, Lagrange interpolation, and the injected randomness they are
//! built from.

pub mod error;
pub mod field_element;
pub mod interpolate;
pub mod macros;
pub mod poly;
pub mod prelude;
pub mod random;
pub mod tables;

pub use crate::{
    field_element::Gf256,
    interpolate::{interpolate_at, interpolate_at_zero},
    poly::Polynomial,
    random::RandomSource,
};
