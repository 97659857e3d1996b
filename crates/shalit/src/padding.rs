// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Padding and length encoding (FIPS 180-4 section 5.1.1)
//!
//! A message of `L` bytes is split into `L / 64` input blocks followed by one
//! or two tail blocks:
//!
//! ```text
//! R = L mod 64
//!
//! R < 56:   | R message bytes | 0x80 | zeros ... | bit length (u64 BE) |   one tail block
//!
//! R >= 56:  | R message bytes | 0x80 | zeros ... |                          first tail block
//!           | zeros ...                          | bit length (u64 BE) |   second tail block
//! ```

use crate::endian::store_be64;

/// Size of a SHA-256 block in bytes
pub const BLOCK_LEN: usize = 64;

/// Offset of the 8-byte bit-length trailer inside the last block
pub const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// Padding terminator appended right after the message bytes
pub const TERMINATOR: u8 = 0x80;

/// One 64-byte block of input or padding
pub type MessageBlock = [u8; BLOCK_LEN];

/// Total padded length in bytes of a message of `len` bytes.
pub const fn padded_len(len: usize) -> usize {
    let tail_blocks = if len % BLOCK_LEN < LENGTH_OFFSET { 1 } else { 2 };
    (len / BLOCK_LEN + tail_blocks) * BLOCK_LEN
}

/// A message viewed as its padded block sequence.
///
/// Input blocks are read straight from the borrowed message; only the tail
/// (at most two blocks) is staged. Building one never allocates.
///
/// The bit length is `len * 8` modulo 2^64, so messages must be shorter than
/// 2^61 bytes to be hashed correctly. This is not checked.
#[derive(Debug, Clone, Copy)]
pub struct PaddedMessage<'a> {
    data: &'a [u8],
    full_blocks: usize,
    tail: [MessageBlock; 2],
    tail_blocks: usize,
}

impl<'a> PaddedMessage<'a> {
    /// Pad `data`.
    pub const fn new(data: &'a [u8]) -> Self {
        let len = data.len();
        let full_blocks = len / BLOCK_LEN;
        let remainder = len % BLOCK_LEN;
        let start = full_blocks * BLOCK_LEN;

        let mut tail = [[0u8; BLOCK_LEN]; 2];
        let mut i = 0;
        while i < remainder {
            tail[0][i] = data[start + i];
            i += 1;
        }
        tail[0][remainder] = TERMINATOR;

        // No room for the trailer after the terminator: spill into a second block
        let tail_blocks = if remainder < LENGTH_OFFSET { 1 } else { 2 };
        let bit_len = (len as u64).wrapping_mul(8);
        store_be64(&mut tail[tail_blocks - 1], LENGTH_OFFSET, bit_len);

        Self {
            data,
            full_blocks,
            tail,
            tail_blocks,
        }
    }

    /// Length of the unpadded message in bytes
    pub const fn message_len(&self) -> usize {
        self.data.len()
    }

    /// Message length in bits, as written into the trailer
    pub const fn bit_len(&self) -> u64 {
        (self.data.len() as u64).wrapping_mul(8)
    }

    /// Number of blocks taken unchanged from the message
    pub const fn full_blocks(&self) -> usize {
        self.full_blocks
    }

    /// Number of tail blocks (1 or 2)
    pub const fn padding_blocks(&self) -> usize {
        self.tail_blocks
    }

    /// Total number of blocks to fold
    pub const fn block_count(&self) -> usize {
        self.full_blocks + self.tail_blocks
    }

    /// Block `index` of the padded sequence.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.block_count()`.
    pub const fn block(&self, index: usize) -> MessageBlock {
        assert!(index < self.block_count(), "block index out of range");

        if index >= self.full_blocks {
            return self.tail[index - self.full_blocks];
        }

        let start = index * BLOCK_LEN;
        let mut block = [0u8; BLOCK_LEN];
        let mut i = 0;
        while i < BLOCK_LEN {
            block[i] = self.data[start + i];
            i += 1;
        }
        block
    }

    /// Iterate over every block in order.
    pub fn blocks(&self) -> Blocks<'a> {
        Blocks {
            message: *self,
            next: 0,
        }
    }
}

/// Iterator over the blocks of a [`PaddedMessage`].
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    message: PaddedMessage<'a>,
    next: usize,
}

impl Iterator for Blocks<'_> {
    type Item = MessageBlock;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.message.block_count() {
            return None;
        }
        let block = self.message.block(self.next);
        self.next += 1;
        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.message.block_count() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Blocks<'_> {}

impl core::iter::FusedIterator for Blocks<'_> {}
