// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # shalit - SHA-256 with build-time digest literals
//!
//! A pure Rust SHA-256 (FIPS 180-4) whose whole pipeline is `const fn`. The
//! same code computes digests at run time ([`compute`]) and at build time
//! ([`sha256!`]), so a binary can embed the digest of a known value without
//! embedding the value.
//!
//! ## Pipeline
//!
//! ```text
//! +-----------------------------------------+
//! |  compute(&[u8]) -> Digest               |   engine
//! +-----------------------------------------+
//!           v                    ^
//! +-----------------------------------------+
//! |  PaddedMessage (0x80, zeros, bit len)   |   padding
//! +-----------------------------------------+
//!           v                    ^
//! +-----------------------------------------+
//! |  MessageSchedule (16 -> 64 words)       |   schedule
//! +-----------------------------------------+
//!           v                    ^
//! +-----------------------------------------+
//! |  rounds + HashState::fold               |   compress / state
//! +-----------------------------------------+
//!           v                    ^
//! +-----------------------------------------+
//! |  Endian codec (big-endian load/store)   |   endian
//! +-----------------------------------------+
//! ```
//!
//! ## Guarantees
//!
//! - No heap allocation, no I/O, no shared state: `compute` is safe to call
//!   from any number of threads.
//! - Host byte order never leaks into results.
//! - Messages must be shorter than 2^61 bytes ([`MAX_MESSAGE_LEN`]).
//!
//! ## Not provided
//!
//! - Incremental (`update`/`finalize`) hashing: the whole message is passed
//!   at once.
//! - SIMD or SHA-NI code paths.
//! - Other hash functions.
//!
//! ## Feature Flags
//!
//! - `serde` -- `Serialize`/`Deserialize` for [`Digest`] as a hex string

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Byte-order aware integer load/store
pub mod endian;

/// Message padding and block sequence
pub mod padding;

/// Message schedule expansion
pub mod schedule;

/// Running hash state
pub mod state;

/// 64-round compression function
pub mod compress;

/// `compute` entry point
pub mod engine;

/// Digest value type
pub mod digest;

/// Error types
pub mod error;

/// Build-time digests (`sha256!`)
pub mod literal;

/// Reference digest verification
pub mod verify;

pub use crate::digest::{Digest, DIGEST_HEX_LEN, DIGEST_LEN};
pub use crate::engine::{compute, MAX_MESSAGE_LEN};
pub use crate::error::DigestParseError;
pub use crate::literal::compute_str;
pub use crate::padding::{MessageBlock, PaddedMessage, BLOCK_LEN};
pub use crate::schedule::MessageSchedule;
pub use crate::state::HashState;
pub use crate::verify::{Verdict, Verifier};
