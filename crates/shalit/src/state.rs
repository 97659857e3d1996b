// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Running hash state

use crate::digest::{Digest, DIGEST_LEN};
use crate::endian::store_be32;

/// Number of 32-bit words in the hash state
pub const STATE_WORDS: usize = 8;

/// The eight working words `H0..H7`.
///
/// Fresh for every `compute` call, starting at [`HashState::IV`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashState {
    words: [u32; STATE_WORDS],
}

impl HashState {
    /// SHA-256 initial hash values (FIPS 180-4 section 5.3.3)
    pub const IV: Self = Self::from_words([
        0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a,
        0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
    ]);

    /// Wrap eight raw words
    pub const fn from_words(words: [u32; STATE_WORDS]) -> Self {
        Self { words }
    }

    /// The eight words in order `a..h`
    pub const fn words(&self) -> &[u32; STATE_WORDS] {
        &self.words
    }

    /// Elementwise sum modulo 2^32 of this (pre-round) state and the
    /// post-round working variables of one block.
    pub const fn fold(&self, rounds: &HashState) -> HashState {
        let mut words = self.words;
        let mut i = 0;
        while i < STATE_WORDS {
            words[i] = words[i].wrapping_add(rounds.words[i]);
            i += 1;
        }
        Self { words }
    }

    /// Serialize as the digest: each word big-endian, words in order.
    pub const fn to_digest(&self) -> Digest {
        let mut out = [0u8; DIGEST_LEN];
        let mut i = 0;
        while i < STATE_WORDS {
            store_be32(&mut out, i * 4, self.words[i]);
            i += 1;
        }
        Digest::from_bytes(out)
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::IV
    }
}
