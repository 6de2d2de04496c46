pub use crate::{gf, gf_vec, poly};
pub use crate::{
    error::{InterpolationError, MathError},
    field_element::Gf256,
    interpolate::{interpolate_at, interpolate_at_zero},
    poly::Polynomial,
    random::RandomSource,
};
