// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Build-time digest literals
//!
//! [`compute`] is a `const fn`, so evaluating it inside a `const` item runs
//! the engine in the compiler. The [`sha256!`](crate::sha256) macro wraps
//! that pattern: the resulting binary holds only the 32 digest bytes, the
//! plaintext literal is consumed during constant evaluation and never emitted.
//!
//! ```
//! use shalit::{sha256, Digest};
//!
//! const ABC: Digest = sha256!("abc");
//! const RAW: Digest = sha256!(bytes: b"\x00\x01\x02");
//!
//! assert_eq!(ABC, shalit::compute(b"abc"));
//! assert_eq!(RAW, shalit::compute(&[0, 1, 2]));
//! ```

use crate::digest::Digest;
use crate::engine::compute;

/// Digest of the UTF-8 bytes of `text`, usable in `const` items.
pub const fn compute_str(text: &str) -> Digest {
    compute(text.as_bytes())
}

/// Digest of a string or byte-string, evaluated at build time.
///
/// - `sha256!("text")` hashes the UTF-8 bytes of a `&'static str` constant.
/// - `sha256!(bytes: b"...")` hashes a byte-string or any `const` byte slice.
///
/// The argument must be a constant expression; anything else is a compile
/// error, never a silent runtime fallback.
#[macro_export]
macro_rules! sha256 {
    (bytes: $bytes:expr $(,)?) => {{
        const DIGEST: $crate::Digest = $crate::compute($bytes);
        DIGEST
    }};
    ($text:expr $(,)?) => {{
        const DIGEST: $crate::Digest = $crate::literal::compute_str($text);
        DIGEST
    }};
}
