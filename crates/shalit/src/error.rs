// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types
//!
//! Hashing itself cannot fail. Errors only come from parsing digests given
//! as text (command-line flags, config files).

use thiserror::Error;

/// Failure to parse a hex-encoded digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DigestParseError {
    /// Text is not exactly 64 bytes long
    #[error("expected 64 hex digits, found {actual} bytes")]
    InvalidLength {
        /// Length of the rejected text in bytes
        actual: usize,
    },

    /// A byte that is not `0-9`, `a-f` or `A-F`
    #[error("invalid hex digit {found:?} at position {position}")]
    InvalidHexDigit {
        /// Byte offset of the bad digit
        position: usize,
        /// The offending byte, as a char
        found: char,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DigestParseError::InvalidLength { actual: 3 };
        assert_eq!(err.to_string(), "expected 64 hex digits, found 3 bytes");

        let err = DigestParseError::InvalidHexDigit {
            position: 5,
            found: 'g',
        };
        assert_eq!(err.to_string(), "invalid hex digit 'g' at position 5");
    }
}
