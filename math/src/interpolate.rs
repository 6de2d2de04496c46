//! Lagrange interpolation over GF(2^8).

use crate::error::InterpolationError;
use crate::field_element::Gf256;

/// Value at `x` of the unique polynomial of degree `< k` through the `k`
/// sample points `(x_samples[i], y_samples[i])`.
///
/// Runs in `O(k^2)` field operations. The x-samples must be pairwise
/// distinct; a repeated x-sample makes a basis denominator zero and the
/// field division panics.
pub fn interpolate_at(
    x_samples: &[Gf256],
    y_samples: &[Gf256],
    x: Gf256,
) -> Result<Gf256, InterpolationError> {
    if x_samples.len() != y_samples.len() {
        return Err(InterpolationError::LengthMismatch {
            x_len: x_samples.len(),
            y_len: y_samples.len(),
        });
    }

    let mut result = Gf256::ZERO;
    for (i, (&x_i, &y_i)) in x_samples.iter().zip(y_samples).enumerate() {
        let basis = x_samples
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .fold(Gf256::ONE, |basis, (_, &x_j)| {
                basis * ((x + x_j) / (x_i + x_j))
            });
        result += y_i * basis;
    }

    Ok(result)
}

/// Recover the intercept `f(0)` from sample points.
pub fn interpolate_at_zero(
    x_samples: &[Gf256],
    y_samples: &[Gf256],
) -> Result<Gf256, InterpolationError> {
    interpolate_at(x_samples, y_samples, Gf256::ZERO)
}
