//! Shared macros for constructing field elements and polynomials.
//!
//! These macros delegate to the types they create, which keeps tests and
//! examples concise.

/// Simplifies constructing [`Gf256`](crate::field_element::Gf256)s.
///
/// ```
/// use shamir_math::prelude::*;
///
/// let a = gf!(42);
/// assert_eq!(a, Gf256::from(42u8));
/// ```
#[macro_export]
macro_rules! gf {
    ($value:expr) => {
        $crate::field_element::Gf256::from($value as u8)
    };
}

/// Create a [`Vec`] of [`Gf256`](crate::field_element::Gf256)s.
///
/// ```
/// use shamir_math::prelude::*;
///
/// let repeated = gf_vec![7; 3];
/// assert_eq!(repeated, vec![gf!(7); 3]);
///
/// let listed = gf_vec![1, 2, 3];
/// assert_eq!(listed, vec![gf!(1), gf!(2), gf!(3)]);
/// ```
#[macro_export]
macro_rules! gf_vec {
    ($b:expr; $n:expr) => {
        vec![$crate::gf!($b); $n]
    };
    ($($b:expr),* $(,)?) => {
        vec![$($crate::gf!($b)),*]
    };
}

/// Construct a [`Polynomial`](crate::poly::Polynomial) from coefficients,
/// lowest degree first.
///
/// ```
/// use shamir_math::prelude::*;
///
/// let poly = poly![1, 2, 3];
/// assert_eq!(poly.coefficients(), &[gf!(1), gf!(2), gf!(3)]);
/// assert_eq!(poly.evaluate(gf!(0)), gf!(1));
/// ```
#[macro_export]
macro_rules! poly {
    ($($coeff:expr),+ $(,)?) => {{
        $crate::poly::Polynomial::from($crate::gf_vec![$($coeff),+])
    }};
}
