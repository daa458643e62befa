//! Per-entry report lines
//!
//! Reporting is a side effect layered on top of the reconciliation loop, not
//! part of its decision logic. Two line layouts exist:
//!
//! - listing mode: `<size>  <checksum-hex>  <path>`
//! - compare mode: `<status-char>  <size>  <checksum-hex>  <path>`
//!
//! The size cell is left-aligned: width 8 with human units when pretty,
//! width 12 with raw integer bytes otherwise. Formatting is pure; emission
//! to stdout is gated on the verbose option.

use crate::types::{FileRecord, Status, VerifyOptions};
use crate::utils::format_bytes;

/// Emits one line per processed record when verbose output is enabled
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    verbose: bool,
    pretty: bool,
}

impl Reporter {
    /// Build a reporter from the run's options
    pub fn new(options: VerifyOptions) -> Self {
        Self {
            verbose: options.verbose,
            pretty: options.pretty,
        }
    }

    /// Emit a listing-mode line for one record
    pub fn record(&self, record: &FileRecord, checksum: &[u8]) {
        if self.verbose {
            println!("{}", format_list_line(record, checksum, self.pretty));
        }
    }

    /// Emit a compare-mode line for one classified record
    pub fn status(&self, status: Status, record: &FileRecord, checksum: &[u8]) {
        if self.verbose {
            println!(
                "{}",
                format_compare_line(status, record, checksum, self.pretty)
            );
        }
    }
}

/// Listing layout: size, checksum, path
pub fn format_list_line(record: &FileRecord, checksum: &[u8], pretty: bool) -> String {
    format!(
        "{}  {}  {}",
        size_cell(record.size, pretty),
        hex::encode(checksum),
        record.path.display()
    )
}

/// Compare layout: status character, size, checksum, path
pub fn format_compare_line(
    status: Status,
    record: &FileRecord,
    checksum: &[u8],
    pretty: bool,
) -> String {
    format!(
        "{}  {}  {}  {}",
        status.as_char(),
        size_cell(record.size, pretty),
        hex::encode(checksum),
        record.path.display()
    )
}

fn size_cell(size: u64, pretty: bool) -> String {
    if pretty {
        format!("{:<8}", format_bytes(size))
    } else {
        format!("{:<12}", size)
    }
}
