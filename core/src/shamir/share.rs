use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::ShareError;
use crate::params::SHARE_OVERHEAD;

/// Smallest well-formed share: one evaluation plus the x-coordinate.
pub const MIN_SHARE_LEN: usize = 1 + SHARE_OVERHEAD;

/// A single share of a secret.
///
/// The layout is `len(secret)` polynomial evaluations followed by one byte
/// holding the share's x-coordinate. Shares carry everything needed to
/// combine them; no external index is kept. The buffer is wiped on drop.
#[derive(Clone, PartialEq, Eq, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(try_from = "Vec<u8>")]
pub struct Share(Vec<u8>);

impl Share {
    /// Wrap bytes the split engine laid out itself.
    pub(super) fn from_layout(bytes: Vec<u8>) -> Self {
        debug_assert!(bytes.len() >= MIN_SHARE_LEN);
        Self(bytes)
    }

    /// The trailing x-coordinate byte.
    pub fn x_coordinate(&self) -> u8 {
        self.0.last().copied().unwrap_or_default()
    }

    /// The per-position evaluations, without the x-coordinate.
    pub fn values(&self) -> &[u8] {
        &self.0[..self.secret_len()]
    }

    /// Length of the secret this share belongs to.
    pub fn secret_len(&self) -> usize {
        self.0.len().saturating_sub(SHARE_OVERHEAD)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(mut self) -> Vec<u8> {
        std::mem::take(&mut self.0)
    }
}

impl AsRef<[u8]> for Share {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<Vec<u8>> for Share {
    type Error = ShareError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        if bytes.len() < MIN_SHARE_LEN {
            return Err(ShareError::TooShort(bytes.len()));
        }
        Ok(Self(bytes))
    }
}

impl TryFrom<&[u8]> for Share {
    type Error = ShareError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from(bytes.to_vec())
    }
}

// Borrows the buffer; no copy is made.
impl Serialize for Share {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.0)
    }
}

impl From<Share> for Vec<u8> {
    fn from(share: Share) -> Self {
        share.into_bytes()
    }
}

// Evaluations are secret-derived; only the public coordinate is printed.
impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("x", &self.x_coordinate())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
