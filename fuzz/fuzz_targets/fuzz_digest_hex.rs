// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use libfuzzer_sys::fuzz_target;
use shalit::Digest;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Never panics; accepted text re-encodes to the same value
    if let Ok(digest) = Digest::from_hex(text) {
        assert_eq!(digest.to_hex(), text.to_ascii_lowercase());
        assert_eq!(Digest::from_hex(&digest.to_hex()), Ok(digest));
    }
});
