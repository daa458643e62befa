//! Pluggable checksum algorithm with per-file and whole-run accumulators
//!
//! The manifest header names its digest algorithm, so the concrete hash
//! implementation is selected at runtime through [`digest::DynDigest`] trait
//! objects. A [`Digest`] holds two independent hash states fed by the same
//! write path:
//!
//! - the **local** state covers bytes written since the last [`reset`] and
//!   is compared against each record's checksum;
//! - the **global** state is never reset and seals the entire observed byte
//!   stream, compared against the trailer at end of run.
//!
//! Modelling these as two separate hasher objects (rather than one state
//! with implicit reset rules) makes the failure modes testable: a missing
//! reset leaks bytes into the next file's local digest, and a stray reset of
//! the global state breaks the whole-manifest seal.
//!
//! ## Examples
//!
//! ```rust
//! use attest::digest::Digest;
//!
//! # fn main() -> attest::Result<()> {
//! let mut digest = Digest::new("sha256")?;
//! digest.update(b"first file");
//! let first = digest.local();
//! digest.reset();
//!
//! digest.update(b"second file");
//! assert_ne!(digest.local(), first);
//! // The global state still covers both files' bytes.
//! let seal = digest.global();
//! assert_ne!(seal, digest.local());
//! # Ok(())
//! # }
//! ```
//!
//! [`reset`]: Digest::reset

use crate::error::{AttestError, Result};
use digest::DynDigest;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use std::io;

/// Algorithm identifiers accepted in a manifest header
pub const SUPPORTED_ALGORITHMS: &[&str] = &["md5", "sha1", "sha224", "sha256", "sha384", "sha512"];

/// Resolve an algorithm identifier to a fresh hasher instance
fn resolve(name: &str) -> Result<Box<dyn DynDigest>> {
    let hasher: Box<dyn DynDigest> = match name {
        "md5" => Box::new(Md5::default()),
        "sha1" => Box::new(Sha1::default()),
        "sha224" => Box::new(Sha224::default()),
        "sha256" => Box::new(Sha256::default()),
        "sha384" => Box::new(Sha384::default()),
        "sha512" => Box::new(Sha512::default()),
        _ => return Err(AttestError::UnknownAlgorithm(name.to_string())),
    };
    Ok(hasher)
}

/// Checksum state for one verification run
///
/// Construction fixes the algorithm for the object's lifetime. Both
/// accumulators start empty; [`Digest::update`] feeds them in lockstep.
/// Also implements [`std::io::Write`], so a file's contents can be streamed
/// through with [`std::io::copy`].
pub struct Digest {
    algorithm: String,
    local: Box<dyn DynDigest>,
    global: Box<dyn DynDigest>,
}

impl Digest {
    /// Create a digest for the named algorithm
    ///
    /// # Errors
    ///
    /// [`AttestError::UnknownAlgorithm`] if the name is not registered.
    /// Identifiers are matched case-insensitively.
    pub fn new(algorithm: &str) -> Result<Self> {
        let name = algorithm.to_ascii_lowercase();
        Ok(Self {
            local: resolve(&name)?,
            global: resolve(&name)?,
            algorithm: name,
        })
    }

    /// The resolved algorithm identifier
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Fixed output length in bytes for the selected algorithm
    ///
    /// The decoder uses this to size each record's checksum field and the
    /// trailer's seal.
    pub fn output_size(&self) -> usize {
        self.local.output_size()
    }

    /// Feed bytes into both accumulators
    pub fn update(&mut self, data: &[u8]) {
        self.local.update(data);
        self.global.update(data);
    }

    /// Digest over the bytes written since the last [`Digest::reset`]
    ///
    /// Non-destructive: the local state keeps accumulating afterwards.
    pub fn local(&self) -> Vec<u8> {
        self.local.box_clone().finalize().to_vec()
    }

    /// Digest over every byte written since construction
    ///
    /// Meaningful once, after the full manifest has been processed, where it
    /// is compared against the trailer's seal.
    pub fn global(&self) -> Vec<u8> {
        self.global.box_clone().finalize().to_vec()
    }

    /// Clear the local accumulator; the global accumulator is unaffected
    ///
    /// Must be called after evaluating each file's local digest, otherwise
    /// local digests leak cross-file data.
    pub fn reset(&mut self) {
        self.local.reset();
    }
}

impl io::Write for Digest {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Digest")
            .field("algorithm", &self.algorithm)
            .field("output_size", &self.output_size())
            .finish()
    }
}
