// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! SHA-256 digest value

use crate::error::DigestParseError;
use std::fmt;
use std::str::FromStr;

/// Size of a SHA-256 digest in bytes
pub const DIGEST_LEN: usize = 32;

/// Length of a digest in hex text
pub const DIGEST_HEX_LEN: usize = DIGEST_LEN * 2;

/// A 32-byte SHA-256 digest.
///
/// The byte layout is the big-endian serialization of the final state words,
/// so it is the same across every conforming implementation. Formats as 64
/// lowercase hex digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_LEN]);

const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Digest {
    /// Wrap raw digest bytes
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrow the digest bytes
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Unwrap into the digest bytes
    pub const fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Parse 64 hex digits (either case).
    ///
    /// Usable in `const` items, so a known reference digest can be written
    /// as text and still be checked at build time.
    pub const fn from_hex(text: &str) -> Result<Self, DigestParseError> {
        let text = text.as_bytes();
        if text.len() != DIGEST_HEX_LEN {
            return Err(DigestParseError::InvalidLength { actual: text.len() });
        }

        let mut out = [0u8; DIGEST_LEN];
        let mut i = 0;
        while i < DIGEST_HEX_LEN {
            let nibble = match hex_value(text[i]) {
                Some(v) => v,
                None => {
                    return Err(DigestParseError::InvalidHexDigit {
                        position: i,
                        found: text[i] as char,
                    })
                }
            };
            out[i / 2] |= if i % 2 == 0 { nibble << 4 } else { nibble };
            i += 1;
        }
        Ok(Self(out))
    }

    /// Lowercase hex encoding
    pub fn to_hex(&self) -> String {
        format!("{:x}", self)
    }

    /// Compare without an early exit on the first differing byte.
    ///
    /// Use this when one side is derived from a secret.
    pub const fn ct_eq(&self, other: &Digest) -> bool {
        let mut diff = 0u8;
        let mut i = 0;
        while i < DIGEST_LEN {
            diff |= self.0[i] ^ other.0[i];
            i += 1;
        }
        diff == 0
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({:x})", self)
    }
}

impl FromStr for Digest {
    type Err = DigestParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s.trim())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Digest;
    use serde::de::{self, Deserializer, Visitor};
    use serde::{Deserialize, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Digest {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_hex())
        }
    }

    struct HexVisitor;

    impl<'de> Visitor<'de> for HexVisitor {
        type Value = Digest;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a SHA-256 digest as 64 hex digits")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Digest, E> {
            v.parse().map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Digest {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_str(HexVisitor)
        }
    }
}
