// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Hash engine
//!
//! ```text
//! message --> PaddedMessage --> block i --> MessageSchedule --> rounds --> fold --+
//!                                  ^                                              |
//!                                  +---------------- next block ------------------+
//!                                                                                 |
//!                                             HashState::to_digest <-- last block-+
//! ```

use crate::compress::rounds;
use crate::digest::Digest;
use crate::padding::PaddedMessage;
use crate::schedule::MessageSchedule;
use crate::state::HashState;

/// Exclusive upper bound on the message length in bytes.
///
/// The trailer stores the length in bits as a `u64`. Longer messages are a
/// caller error and produce a wrong digest, not a panic.
pub const MAX_MESSAGE_LEN: u64 = 1 << 61;

/// Compute the SHA-256 digest of `data`.
///
/// Pure and deterministic: no I/O, no allocation, nothing shared between
/// calls. Being a `const fn`, the same code also runs at build time (see
/// [`sha256!`](crate::sha256)).
///
/// `data.len()` must be below [`MAX_MESSAGE_LEN`].
///
/// # Example
///
/// ```
/// let digest = shalit::compute(b"abc");
/// assert_eq!(
///     digest.to_hex(),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
pub const fn compute(data: &[u8]) -> Digest {
    let message = PaddedMessage::new(data);
    let mut state = HashState::IV;

    let mut index = 0;
    while index < message.block_count() {
        let block = message.block(index);
        let schedule = MessageSchedule::expand(&block);
        state = state.fold(&rounds(&state, &schedule));
        index += 1;
    }

    state.to_digest()
}
