//! Utility functions for attest
//!
//! Collaborators consumed by the reconciliation engine and the reporting
//! layer: candidate-directory path lookup and human-readable size
//! formatting.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Resolve a recorded relative path against ordered candidate directories
///
/// The first directory containing a regular file at the relative path wins.
/// Directories, symlinks, and other non-regular entries at a candidate
/// location are skipped, not matched.
///
/// # Example
///
/// ```rust,ignore
/// let resolved = find_regular_file(Path::new("src/main.rs"), &dirs);
/// ```
pub fn find_regular_file(relative: &Path, dirs: &[PathBuf]) -> Option<PathBuf> {
    for dir in dirs {
        let candidate = dir.join(relative);
        match fs::metadata(&candidate) {
            Ok(meta) if meta.is_file() => {
                trace!("resolved {:?} in {:?}", relative, dir);
                return Some(candidate);
            }
            _ => continue,
        }
    }
    None
}

/// Format bytes in human-readable form
///
/// Converts a byte count into a display string using binary units
/// (1024-based). Values under 1024 bytes are shown as whole numbers with
/// "B"; larger values get 2 decimal places and the appropriate unit.
///
/// # Example
///
/// ```rust,ignore
/// assert_eq!(format_bytes(1536), "1.50 KB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB", "PB"];
    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}
