// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Message schedule expansion (FIPS 180-4 section 6.2.2, step 1)

use crate::endian::load_be32;
use crate::padding::MessageBlock;

/// Number of 32-bit words in one block
pub const BLOCK_WORDS: usize = 16;

/// Number of words in an expanded schedule (one per round)
pub const SCHEDULE_WORDS: usize = 64;

const fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

const fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// The 64-word schedule `W` derived from one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageSchedule {
    words: [u32; SCHEDULE_WORDS],
}

impl MessageSchedule {
    /// Expand `block` into its schedule.
    ///
    /// Words 0..16 are the block's big-endian words, the rest follow
    /// `W[i] = s1(W[i-2]) + W[i-7] + s0(W[i-15]) + W[i-16]` modulo 2^32.
    pub const fn expand(block: &MessageBlock) -> Self {
        let mut w = [0u32; SCHEDULE_WORDS];

        let mut i = 0;
        while i < BLOCK_WORDS {
            w[i] = load_be32(block, i * 4);
            i += 1;
        }
        while i < SCHEDULE_WORDS {
            w[i] = small_sigma1(w[i - 2])
                .wrapping_add(w[i - 7])
                .wrapping_add(small_sigma0(w[i - 15]))
                .wrapping_add(w[i - 16]);
            i += 1;
        }

        Self { words: w }
    }

    /// Word `W[index]`
    pub const fn word(&self, index: usize) -> u32 {
        self.words[index]
    }

    /// All 64 words
    pub const fn as_words(&self) -> &[u32; SCHEDULE_WORDS] {
        &self.words
    }
}
