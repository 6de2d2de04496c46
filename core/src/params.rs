//! Split parameters and the limits the share format imposes on them.

use serde::{Deserialize, Serialize};

use crate::error::ParameterError;

/// Share x-coordinates are one non-zero byte, so at most 255 shares exist.
pub const MAX_PARTS: usize = 255;
pub const MIN_THRESHOLD: usize = 2;
pub const MAX_THRESHOLD: usize = 255;

/// Bytes each share carries beyond the secret: the trailing x-coordinate.
pub const SHARE_OVERHEAD: usize = 1;

const DEFAULT_PARTS: usize = 5;
const DEFAULT_THRESHOLD: usize = 3;

/// Validated `(parts, threshold)` pair.
///
/// Deserialization goes through the same checks as [`SplitParams::new`], so
/// a configuration file cannot smuggle in an unusable pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UncheckedSplitParams")]
pub struct SplitParams {
    parts: usize,
    threshold: usize,
}

#[derive(Deserialize)]
struct UncheckedSplitParams {
    parts: usize,
    threshold: usize,
}

impl TryFrom<UncheckedSplitParams> for SplitParams {
    type Error = ParameterError;

    fn try_from(raw: UncheckedSplitParams) -> Result<Self, Self::Error> {
        Self::new(raw.parts, raw.threshold)
    }
}

impl SplitParams {
    /// Checks, in order: `parts >= threshold`, `parts <= 255`,
    /// `threshold >= 2`, `threshold <= 255`. The first violation wins.
    pub fn new(parts: usize, threshold: usize) -> Result<Self, ParameterError> {
        if parts < threshold {
            return Err(ParameterError::PartsBelowThreshold { parts, threshold });
        }
        if parts > MAX_PARTS {
            return Err(ParameterError::TooManyParts(parts));
        }
        if threshold < MIN_THRESHOLD {
            return Err(ParameterError::ThresholdTooSmall(threshold));
        }
        if threshold > MAX_THRESHOLD {
            return Err(ParameterError::ThresholdTooLarge(threshold));
        }

        Ok(Self { parts, threshold })
    }

    pub fn parts(&self) -> usize {
        self.parts
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Degree of the per-byte sharing polynomials.
    pub fn degree(&self) -> u8 {
        // threshold <= 255 after validation
        (self.threshold - 1) as u8
    }

    /// Length of every share produced for a secret of `secret_len` bytes.
    pub fn share_len(&self, secret_len: usize) -> usize {
        secret_len + SHARE_OVERHEAD
    }
}

impl Default for SplitParams {
    fn default() -> Self {
        Self {
            parts: DEFAULT_PARTS,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

pub fn validate_threshold_config(threshold: usize, parts: usize) -> bool {
    SplitParams::new(parts, threshold).is_ok()
}
