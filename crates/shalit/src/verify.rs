// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Secret verification against a reference digest
//!
//! Typical use pairs a build-time literal with a runtime candidate:
//!
//! ```
//! use shalit::{sha256, Verdict, Verifier};
//!
//! const REFERENCE: shalit::Digest = sha256!("hunter2");
//!
//! let verifier = Verifier::new(REFERENCE);
//! assert_eq!(verifier.check(b"hunter2"), Verdict::Match);
//! assert_eq!(verifier.check(b"hunter3"), Verdict::Mismatch);
//! ```

use crate::digest::Digest;
use crate::engine::compute;

/// Outcome of a verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Candidate hashes to the reference digest
    Match,
    /// Candidate hashes to something else
    Mismatch,
}

impl Verdict {
    /// True for [`Verdict::Match`]
    pub const fn is_match(self) -> bool {
        matches!(self, Verdict::Match)
    }
}

/// Checks candidates against one reference digest.
///
/// Comparison goes through [`Digest::ct_eq`]. Neither the candidate nor its
/// digest is ever logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verifier {
    reference: Digest,
}

impl Verifier {
    /// Verifier for `reference`
    pub const fn new(reference: Digest) -> Self {
        Self { reference }
    }

    /// The reference digest
    pub const fn reference(&self) -> &Digest {
        &self.reference
    }

    /// Hash `candidate` and compare it with the reference.
    pub fn check(&self, candidate: &[u8]) -> Verdict {
        log::trace!("verifying candidate of {} bytes", candidate.len());

        let verdict = if compute(candidate).ct_eq(&self.reference) {
            Verdict::Match
        } else {
            Verdict::Mismatch
        };

        log::debug!("verification result: {:?}", verdict);
        verdict
    }

    /// Compare an already computed digest with the reference.
    pub fn check_digest(&self, digest: &Digest) -> Verdict {
        if digest.ct_eq(&self.reference) {
            Verdict::Match
        } else {
            log::debug!("digest does not match reference");
            Verdict::Mismatch
        }
    }
}
