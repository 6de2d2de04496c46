//! Polynomials over GF(2^8) with a secret intercept.
//!
//! A [`Polynomial`] is built around one secret byte, evaluated at a handful
//! of share coordinates, and dropped. Its coefficients are wiped on drop.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::Result;
use crate::field_element::Gf256;
use crate::random::RandomSource;

/// Polynomial with coefficients stored lowest degree first.
///
/// `coefficients[0]` is the intercept, the value at `x = 0`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Polynomial {
    coefficients: Vec<Gf256>,
}

impl Polynomial {
    /// Random polynomial of the given degree whose intercept is fixed.
    ///
    /// Draws exactly `degree` bytes from `rng`, one per non-constant
    /// coefficient.
    pub fn random<R>(intercept: Gf256, degree: u8, rng: &mut R) -> Result<Self>
    where
        R: RandomSource + ?Sized,
    {
        let mut random = Zeroizing::new(vec![0u8; degree as usize]);
        rng.fill_random(&mut random)?;

        let coefficients = std::iter::once(intercept)
            .chain(random.iter().copied().map(Gf256::new))
            .collect();
        Ok(Self { coefficients })
    }

    pub fn coefficients(&self) -> &[Gf256] {
        &self.coefficients
    }

    /// Degree bound, `coefficients.len() - 1`. Zero for the empty polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    pub fn intercept(&self) -> Gf256 {
        self.coefficients.first().copied().unwrap_or(Gf256::ZERO)
    }

    /// Evaluate at `x` with Horner's method.
    ///
    /// `x = 0` short-circuits to the intercept.
    pub fn evaluate(&self, x: Gf256) -> Gf256 {
        if x == Gf256::ZERO {
            return self.intercept();
        }

        let Some((&leading, rest)) = self.coefficients.split_last() else {
            return Gf256::ZERO;
        };
        rest.iter()
            .rev()
            .fold(leading, |out, &coeff| out * x + coeff)
    }
}

impl From<Vec<Gf256>> for Polynomial {
    fn from(coefficients: Vec<Gf256>) -> Self {
        Self { coefficients }
    }
}

impl From<&[Gf256]> for Polynomial {
    fn from(coefficients: &[Gf256]) -> Self {
        Self {
            coefficients: coefficients.to_vec(),
        }
    }
}

// Coefficients are secret-derived; keep them out of logs.
impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("degree", &self.degree())
            .finish_non_exhaustive()
    }
}
