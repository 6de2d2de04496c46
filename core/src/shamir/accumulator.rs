use shamir_math::prelude::*;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::share::Share;
use crate::params::SHARE_OVERHEAD;

/// Buffer for one share while the secret is evaluated byte by byte.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(super) struct ShareAccumulator {
    pub(super) x: u8,
    pub(super) buffer: Vec<u8>,
}

impl ShareAccumulator {
    pub(super) fn new(x: u8, secret_len: usize) -> Self {
        let mut buffer = vec![0u8; secret_len + SHARE_OVERHEAD];
        buffer[secret_len] = x;
        Self { x, buffer }
    }

    pub(super) fn x(&self) -> Gf256 {
        Gf256::new(self.x)
    }

    /// Record the evaluation for secret byte `position`.
    ///
    /// Positions past the secret are ignored; the trailing coordinate byte
    /// is never overwritten.
    pub(super) fn insert(&mut self, position: usize, value: Gf256) {
        let secret_len = self.buffer.len() - SHARE_OVERHEAD;
        if position >= secret_len {
            return;
        }
        self.buffer[position] = value.value();
    }

    pub(super) fn finalize(mut self) -> Share {
        Share::from_layout(std::mem::take(&mut self.buffer))
    }
}
