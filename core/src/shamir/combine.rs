use shamir_math::prelude::*;
use tracing::debug;
use zeroize::Zeroizing;

use super::share::MIN_SHARE_LEN;
use crate::error::{ShamirError, ShamirResult, ShareError};

/// Shares needed before interpolation is attempted at all.
const MIN_SHARES: usize = 2;

/// Recombine shares produced by one split call into the secret.
///
/// Any `threshold` or more genuine shares recover the secret exactly.
/// Fewer than `threshold` shares, or tampered ones, still produce a
/// secret-length result that is simply wrong; the share format carries no
/// integrity data to detect it.
pub fn combine<S: AsRef<[u8]>>(shares: &[S]) -> ShamirResult<Vec<u8>> {
    if shares.len() < MIN_SHARES {
        return Err(ShamirError::InsufficientShares {
            required: MIN_SHARES,
            provided: shares.len(),
        });
    }

    let share_len = shares[0].as_ref().len();
    if share_len < MIN_SHARE_LEN {
        return Err(ShareError::TooShort(share_len).into());
    }
    for (index, share) in shares.iter().enumerate().skip(1) {
        let found = share.as_ref().len();
        if found != share_len {
            return Err(ShareError::LengthMismatch {
                index,
                expected: share_len,
                found,
            }
            .into());
        }
    }

    let secret_len = share_len - 1;
    let mut seen = [false; 256];
    let mut x_samples = Vec::with_capacity(shares.len());
    for share in shares {
        let x = share.as_ref()[secret_len];
        if std::mem::replace(&mut seen[x as usize], true) {
            return Err(ShamirError::DuplicateShare(x));
        }
        x_samples.push(Gf256::new(x));
    }

    let mut y_samples = Zeroizing::new(vec![Gf256::ZERO; shares.len()]);
    let mut secret = Vec::with_capacity(secret_len);
    for position in 0..secret_len {
        for (y, share) in y_samples.iter_mut().zip(shares) {
            *y = Gf256::new(share.as_ref()[position]);
        }
        let byte = interpolate_at_zero(&x_samples, &y_samples)
            .map_err(MathError::from)?;
        secret.push(byte.value());
    }

    debug!(shares = shares.len(), secret_len, "combined shares");

    Ok(secret)
}
