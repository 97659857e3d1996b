// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use libfuzzer_sys::fuzz_target;
use shalit::{compute, HashState, MessageSchedule, PaddedMessage, BLOCK_LEN};

fuzz_target!(|data: &[u8]| {
    let digest = compute(data);

    // Deterministic
    assert_eq!(compute(data), digest);

    // Padding covers the message and always ends on a block boundary
    let message = PaddedMessage::new(data);
    let blocks: Vec<_> = message.blocks().collect();
    assert_eq!(blocks.len(), message.block_count());
    assert!(blocks.len() * BLOCK_LEN >= data.len() + 9);

    // Folding the iterator by hand gives the same digest
    let state = blocks.iter().fold(HashState::IV, |state, block| {
        state.fold(&shalit::compress::rounds(&state, &MessageSchedule::expand(block)))
    });
    assert_eq!(state.to_digest(), digest);
});
