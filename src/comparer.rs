//! Manifest-driven reconciliation of a directory tree
//!
//! The [`Comparer`] drives the record decoder, resolves each recorded path
//! against one or more candidate root directories, recomputes checksums for
//! files that are found, classifies each entry, and at end of stream checks
//! the trailer against the accumulated totals and the global digest.
//!
//! ## Classification
//!
//! Per record, compare mode walks `resolve -> digest -> classify`:
//! a record whose path resolves nowhere is [`Status::Deleted`]; a resolved
//! file whose streamed byte count and local digest both match the record is
//! [`Status::Identical`]; any other outcome - wrong length, wrong digest, or
//! an I/O failure mid-read - is [`Status::Modified`]. Per-file failures are
//! absorbed into the classification and never abort the run; only
//! decode-level and trailer-level failures do.
//!
//! The global digest accumulator functions as a tamper-evident seal over the
//! entire observed byte stream of all resolved files: even `Modified` files
//! contribute their differing bytes, so the trailer's global check fails
//! whenever any file differs, a coarse whole-tree signal layered on top of
//! the per-file classification.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use attest::comparer::Comparer;
//! use attest::types::VerifyOptions;
//! use std::path::PathBuf;
//!
//! # fn main() -> attest::Result<()> {
//! let mut comparer = Comparer::open("tree.manifest", VerifyOptions::default())?;
//! let totals = comparer.compare(&[PathBuf::from("/srv/tree")])?;
//! println!("verified {} against {}", totals, hex::encode(comparer.checksum()));
//! # Ok(())
//! # }
//! ```
//!
//! A `Comparer` is single-use: the record stream is forward-only and the
//! global accumulator is stateful, so one instance supports exactly one
//! `list` or `compare` run. Open a fresh instance for the next run.

use crate::digest::Digest;
use crate::error::{AttestError, Result};
use crate::manifest::{self, RecordReader};
use crate::report::Reporter;
use crate::types::{Aggregate, FileRecord, Status, Tally, VerifyOptions};
use crate::utils::find_regular_file;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Reconciliation engine for one manifest verification run
///
/// Owns the open manifest stream for its whole lifetime; each tracked file's
/// stream is opened, digested, and closed before the next record is pulled.
/// Not designed for concurrent reuse: the global digest accumulator would be
/// corrupted by interleaved writers.
#[derive(Debug)]
pub struct Comparer {
    digest: Digest,
    records: RecordReader<BufReader<File>>,
    reporter: Reporter,
    tally: Tally,
}

impl Comparer {
    /// Open a manifest and fix its digest algorithm
    ///
    /// Reads the fixed header and resolves the named algorithm before any
    /// record is touched.
    ///
    /// # Errors
    ///
    /// [`AttestError::UnknownAlgorithm`] when the header names an
    /// unregistered algorithm; [`AttestError::Decode`] when the header
    /// itself is malformed.
    pub fn open(manifest: impl AsRef<Path>, options: VerifyOptions) -> Result<Self> {
        let path = manifest.as_ref();
        let mut reader = BufReader::new(File::open(path)?);
        let algorithm = manifest::read_algorithm(&mut reader)?;
        let digest = Digest::new(&algorithm)?;
        debug!("opened manifest {:?} ({})", path, digest.algorithm());

        let records = RecordReader::new(reader, digest.output_size());
        Ok(Self {
            digest,
            records,
            reporter: Reporter::new(options),
            tally: Tally::default(),
        })
    }

    /// The algorithm the manifest header selected
    pub fn algorithm(&self) -> &str {
        self.digest.algorithm()
    }

    /// Current global digest value, for diagnostics and testing
    pub fn checksum(&self) -> Vec<u8> {
        self.digest.global()
    }

    /// Classification counts from the compare run, including aborted ones
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Report recorded metadata without touching file contents
    ///
    /// Every recorded path must resolve to a regular file in one of the
    /// candidate directories; the first unresolved path fails the whole run
    /// with [`AttestError::NotFound`]. The trailer is left unread and
    /// unverified - listing assumes a previously verified tree.
    pub fn list(&mut self, dirs: &[PathBuf]) -> Result<Aggregate> {
        let start = Instant::now();
        let mut totals = Aggregate::default();

        while let Some(record) = self.records.next_record()? {
            if find_regular_file(&record.path, dirs).is_none() {
                return Err(AttestError::NotFound { path: record.path });
            }
            self.reporter.record(&record, &record.checksum);
            totals.update(record.size);
        }

        info!(
            "listed {} in {}ms",
            totals,
            start.elapsed().as_millis()
        );
        Ok(totals)
    }

    /// Reconcile every record against the candidate directories
    ///
    /// Classifies each record, accumulates manifest-side accounting
    /// regardless of disk-side outcome, then verifies the trailer: the
    /// declared count/size must equal the accumulated [`Aggregate`]
    /// ([`AttestError::AggregateMismatch`] otherwise) and the declared seal
    /// must equal the global digest
    /// ([`AttestError::GlobalChecksumMismatch`] otherwise).
    pub fn compare(&mut self, dirs: &[PathBuf]) -> Result<Aggregate> {
        let start = Instant::now();
        let mut totals = Aggregate::default();

        while let Some(record) = self.records.next_record()? {
            let status = match find_regular_file(&record.path, dirs) {
                Some(resolved) => match self.digest_file(&resolved, &record) {
                    Ok(()) => Status::Identical,
                    Err(err) => {
                        debug!("{:?} differs: {}", record.path, err);
                        Status::Modified
                    }
                },
                None => Status::Deleted,
            };

            self.tally.record(status);
            totals.update(record.size);

            // Deleted records have no computed digest to show.
            match status {
                Status::Deleted => self.reporter.status(status, &record, &record.checksum),
                _ => self.reporter.status(status, &record, &self.digest.local()),
            }
            self.digest.reset();
        }

        info!(
            "reconciled {}: {} identical, {} modified, {} deleted in {}ms",
            totals,
            self.tally.identical,
            self.tally.modified,
            self.tally.deleted,
            start.elapsed().as_millis()
        );

        self.verify_trailer(totals)?;
        Ok(totals)
    }

    /// Stream one resolved file through the digest and check it
    ///
    /// The file handle is released on every exit path. Bytes read before a
    /// failure have already fed the global accumulator; that is intentional,
    /// the seal covers the observed stream.
    fn digest_file(&mut self, path: &Path, record: &FileRecord) -> Result<()> {
        let mut file = File::open(path)?;
        let streamed = io::copy(&mut file, &mut self.digest)?;

        if streamed != record.size {
            return Err(AttestError::SizeMismatch {
                path: path.to_path_buf(),
                expected: record.size,
                actual: streamed,
            });
        }

        let sum = self.digest.local();
        if sum != record.checksum {
            return Err(AttestError::ChecksumMismatch {
                path: path.to_path_buf(),
                expected: hex::encode(&record.checksum),
                actual: hex::encode(&sum),
            });
        }
        Ok(())
    }

    /// Read the trailer and verify it against accumulated state
    fn verify_trailer(&mut self, seen: Aggregate) -> Result<()> {
        let trailer = self.records.read_trailer()?;

        if trailer.aggregate() != seen {
            return Err(AttestError::AggregateMismatch {
                expected_count: trailer.count,
                expected_size: trailer.total_size,
                actual_count: seen.count,
                actual_size: seen.size,
            });
        }

        let global = self.digest.global();
        if global != trailer.checksum {
            return Err(AttestError::GlobalChecksumMismatch {
                expected: hex::encode(&trailer.checksum),
                actual: hex::encode(&global),
            });
        }
        Ok(())
    }
}
