//! # Attest - manifest-driven directory verification
//!
//! Attest verifies the integrity of a directory tree against a previously
//! recorded binary manifest: a stream of `(path, size, checksum)` records
//! sealed by a trailer declaring the aggregate file count, aggregate size,
//! and a running checksum over every tracked file's bytes.
//!
//! ## Overview
//!
//! For each recorded entry, a verification run detects whether the
//! corresponding file on disk is unchanged, modified, or missing; listing
//! mode reports recorded metadata without touching file contents. Two
//! checksum layers back this up:
//!
//! - a **local** digest per file, compared against each record;
//! - a **global** digest accumulated across all files in manifest order,
//!   compared against the trailer's seal at the end of the run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use attest::{Comparer, VerifyOptions};
//! use std::path::PathBuf;
//!
//! # fn main() -> attest::Result<()> {
//! let options = VerifyOptions { verbose: true, pretty: true };
//! let mut comparer = Comparer::open("tree.manifest", options)?;
//!
//! // Reconcile the manifest against one or more candidate directories.
//! let totals = comparer.compare(&[PathBuf::from("./data")])?;
//! println!("verified {}", totals);
//! # Ok(())
//! # }
//! ```
//!
//! ## Manifest format
//!
//! Big-endian throughout: a 16-byte NUL-padded ASCII algorithm name, then
//! repeated records (`u16` path length, UTF-8 path, `u64` size, checksum of
//! the algorithm's output length), a zero path-length sentinel, and the
//! trailer (`u64` count, `u64` total size, global checksum). The digest
//! algorithm is selected by name at runtime; see [`digest::SUPPORTED_ALGORITHMS`].
//!
//! ## Classification
//!
//! Each record resolves to one of four outcomes, reported with a
//! single-character status: `I`dentical, `M`odified, `D`eleted, or `A`dded.
//! Per-file mismatches (wrong length, wrong digest, unreadable file) are
//! absorbed into the `Modified` classification; structural failures -
//! malformed framing, trailer disagreement - abort the run with a typed
//! error.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T>`] with [`AttestError`] carrying
//! expected-vs-actual context for every mismatch kind, so a failed run can
//! be diagnosed without re-running it.
//!
//! ## Module Organization
//!
//! - [`comparer`]: the reconciliation engine (`list` / `compare`)
//! - [`manifest`]: binary manifest header, record, and trailer decoding
//! - [`digest`]: name-selected checksum algorithms with dual accumulators
//! - [`report`]: per-entry report line formatting and emission
//! - [`types`]: records, trailer, aggregate accounting, options
//! - [`error`]: error types and handling

// Public API modules
pub mod comparer;
pub mod digest;
pub mod error;
pub mod manifest;
pub mod report;
pub mod types;

// Internal modules (not part of public API)
mod utils;

// Re-export main types for convenience
pub use comparer::Comparer;
pub use digest::Digest;
pub use error::{AttestError, Result};
pub use report::Reporter;
pub use types::{Aggregate, FileRecord, Status, Tally, Trailer, VerifyOptions};
