//! Error types for the attest library
//!
//! This module defines all error types that can occur while decoding a
//! manifest or reconciling it against a directory tree. Errors carry enough
//! context (expected vs actual values) to diagnose a failed run without
//! re-running it.

use std::path::PathBuf;
use thiserror::Error;

/// Type alias for Results in the attest library
pub type Result<T> = std::result::Result<T, AttestError>;

/// Main error type for all attest operations
#[derive(Debug, Error)]
pub enum AttestError {
    /// I/O errors during manifest or file reads
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest header names an algorithm that is not registered
    #[error("unknown digest algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// Malformed record or trailer framing in the manifest stream
    #[error("manifest decode error: {0}")]
    Decode(String),

    /// Recorded path absent from every candidate directory
    #[error("no such file: {path:?}")]
    NotFound {
        /// Relative path as recorded in the manifest
        path: PathBuf,
    },

    /// A resolved file's byte count differs from the recorded size
    #[error("size mismatch for {path:?}: expected {expected} bytes, read {actual}")]
    SizeMismatch {
        /// Path of the file on disk
        path: PathBuf,
        /// Size recorded in the manifest
        expected: u64,
        /// Bytes actually streamed from disk
        actual: u64,
    },

    /// A resolved file's digest differs from the recorded checksum
    #[error("checksum mismatch for {path:?}: expected {expected}, computed {actual}")]
    ChecksumMismatch {
        /// Path of the file on disk
        path: PathBuf,
        /// Recorded checksum, hex encoded
        expected: String,
        /// Computed checksum, hex encoded
        actual: String,
    },

    /// Accumulated count/size disagrees with the trailer's declaration
    #[error(
        "aggregate mismatch: trailer declares {expected_count} files / {expected_size} bytes, \
         accumulated {actual_count} files / {actual_size} bytes"
    )]
    AggregateMismatch {
        /// File count declared by the trailer
        expected_count: u64,
        /// Total size declared by the trailer
        expected_size: u64,
        /// File count accumulated during the run
        actual_count: u64,
        /// Total size accumulated during the run
        actual_size: u64,
    },

    /// Whole-manifest checksum disagrees with the trailer's seal
    #[error("global checksum mismatch: expected {expected}, computed {actual}")]
    GlobalChecksumMismatch {
        /// Trailer checksum, hex encoded
        expected: String,
        /// Computed global checksum, hex encoded
        actual: String,
    },
}

impl AttestError {
    /// Create a decode error with a custom message
    pub fn decode(msg: impl Into<String>) -> Self {
        AttestError::Decode(msg.into())
    }

    /// Check if this error reports content that disagrees with the manifest
    ///
    /// True for the per-file and whole-run mismatch variants; false for
    /// structural failures (I/O, framing, unknown algorithm).
    pub fn is_mismatch(&self) -> bool {
        matches!(
            self,
            AttestError::SizeMismatch { .. }
                | AttestError::ChecksumMismatch { .. }
                | AttestError::AggregateMismatch { .. }
                | AttestError::GlobalChecksumMismatch { .. }
        )
    }
}
