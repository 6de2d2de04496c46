use rand::rngs::OsRng;
use shamir_math::prelude::*;
use tracing::debug;

use super::accumulator::ShareAccumulator;
use super::share::Share;
use crate::error::{ParameterError, ShamirResult};
use crate::params::{SplitParams, MAX_PARTS};

/// Split `secret` into `parts` shares, any `threshold` of which recombine
/// it. Randomness comes from the operating system.
pub fn split(
    secret: &[u8],
    parts: usize,
    threshold: usize,
) -> ShamirResult<Vec<Share>> {
    split_with_rng(secret, parts, threshold, &mut OsRng)
}

/// [`split`] with an explicit randomness source.
///
/// All parameters are validated before any randomness is consumed. The
/// source then provides the coordinate permutation followed by
/// `secret.len() * (threshold - 1)` coefficient bytes.
pub fn split_with_rng<R: RandomSource>(
    secret: &[u8],
    parts: usize,
    threshold: usize,
    rng: &mut R,
) -> ShamirResult<Vec<Share>> {
    let params = SplitParams::new(parts, threshold)?;
    split_with_params(secret, params, rng)
}

/// Split with already validated parameters.
pub fn split_with_params<R: RandomSource>(
    secret: &[u8],
    params: SplitParams,
    rng: &mut R,
) -> ShamirResult<Vec<Share>> {
    if secret.is_empty() {
        return Err(ParameterError::EmptySecret.into());
    }

    let mut coordinates: Vec<u8> = (1..=MAX_PARTS as u8).collect();
    rng.shuffle(&mut coordinates)?;

    let mut accumulators: Vec<ShareAccumulator> = coordinates
        .into_iter()
        .take(params.parts())
        .map(|x| ShareAccumulator::new(x, secret.len()))
        .collect();

    for (position, &byte) in secret.iter().enumerate() {
        let polynomial =
            Polynomial::random(Gf256::new(byte), params.degree(), rng)?;
        for accumulator in accumulators.iter_mut() {
            let y = polynomial.evaluate(accumulator.x());
            accumulator.insert(position, y);
        }
    }

    debug!(
        parts = params.parts(),
        threshold = params.threshold(),
        secret_len = secret.len(),
        "split secret into shares"
    );

    Ok(accumulators
        .into_iter()
        .map(ShareAccumulator::finalize)
        .collect())
}
