//! Main test module for attest
//!
//! This module includes all test suites:
//! - Integration tests for whole verification runs
//! - Property-based tests for decode and digest invariants
//! - Edge-case tests for unusual manifests and trees


#[cfg(test)]
mod edge_cases {
    use crate::integration::{ManifestBuilder, VerifyFixture};
    use ::attest::*;
    use sha2::{Digest as Sha2Digest, Sha256};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_empty_manifest() {
        let fixture = VerifyFixture::new(&[]);
        let manifest = fixture.manifest();

        let mut comparer = fixture.open(&manifest);
        let totals = comparer.compare(&fixture.dirs()).unwrap();
        assert_eq!(totals, Aggregate::default());

        // The empty run's seal is the digest of no input at all.
        assert_eq!(comparer.checksum(), Sha256::new().finalize().to_vec());

        let mut comparer = fixture.open(&manifest);
        assert_eq!(comparer.list(&fixture.dirs()).unwrap(), Aggregate::default());
    }

    #[test]
    fn test_zero_byte_file() {
        let fixture = VerifyFixture::new(&[("empty.txt", b""), ("full.txt", b"x")]);
        let mut comparer = fixture.open(&fixture.manifest());

        let totals = comparer.compare(&fixture.dirs()).unwrap();
        assert_eq!(totals, Aggregate { count: 2, size: 1 });
        assert_eq!(comparer.tally().identical, 2);
    }

    #[test]
    fn test_unicode_paths() {
        let entries: &[(&str, &[u8])] = &[
            ("файл.txt", b"russian"),
            ("文件/データ.txt", b"nested unicode"),
        ];

        let fixture = VerifyFixture::new(entries);
        let mut comparer = fixture.open(&fixture.manifest());
        let totals = comparer.compare(&fixture.dirs()).unwrap();

        assert_eq!(totals.count, 2);
        assert_eq!(comparer.tally().identical, 2);
    }

    #[test]
    fn test_duplicate_content_across_records() {
        let entries: &[(&str, &[u8])] = &[
            ("a/copy.txt", b"same bytes"),
            ("b/copy.txt", b"same bytes"),
        ];

        let fixture = VerifyFixture::new(entries);
        let mut comparer = fixture.open(&fixture.manifest());
        let totals = comparer.compare(&fixture.dirs()).unwrap();

        assert_eq!(totals, Aggregate { count: 2, size: 20 });
    }

    #[test]
    fn test_record_for_path_that_is_a_directory() {
        let fixture = VerifyFixture::new(&[("entry", b"was a file")]);
        fs::remove_file(fixture.tree.path().join("entry")).unwrap();
        fs::create_dir(fixture.tree.path().join("entry")).unwrap();

        // A directory at the recorded path is not a regular file.
        let mut comparer = fixture.open(&fixture.manifest());
        let err = comparer.compare(&fixture.dirs()).unwrap_err();
        assert!(matches!(err, AttestError::GlobalChecksumMismatch { .. }));
        assert_eq!(comparer.tally().deleted, 1);
    }

    #[test]
    fn test_empty_candidate_directory_list() {
        let fixture = VerifyFixture::new(&[("a.txt", b"abc")]);

        let mut comparer = fixture.open(&fixture.manifest());
        let err = comparer.compare(&[]).unwrap_err();
        assert!(matches!(err, AttestError::GlobalChecksumMismatch { .. }));
        assert_eq!(comparer.tally().deleted, 1);

        let mut comparer = fixture.open(&fixture.manifest());
        let err = comparer.list(&[]).unwrap_err();
        assert!(matches!(err, AttestError::NotFound { .. }));
    }

    #[test]
    fn test_header_padding_variants() {
        // Shortest and longest registered names both fit the 16-byte field.
        for algorithm in ["md5", "sha512"] {
            let mut bytes = vec![0u8; 16];
            bytes[..algorithm.len()].copy_from_slice(algorithm.as_bytes());

            let scratch = TempDir::new().unwrap();
            let path = scratch.path().join("header.manifest");
            fs::write(&path, &bytes).unwrap();

            let comparer = Comparer::open(&path, VerifyOptions::default()).unwrap();
            assert_eq!(comparer.algorithm(), algorithm);
        }
    }

    #[test]
    fn test_trailer_with_wrong_total_size() {
        let builder = ManifestBuilder::new().entry("a.txt", b"abc");
        let tree = TempDir::new().unwrap();
        builder.populate(tree.path()).unwrap();

        let mut bytes = builder.body();
        let mut trailer = builder.trailer();
        trailer[8..16].copy_from_slice(&999u64.to_be_bytes());
        bytes.extend(trailer);

        let scratch = TempDir::new().unwrap();
        let manifest = scratch.path().join("tampered.manifest");
        fs::write(&manifest, bytes).unwrap();

        let mut comparer = Comparer::open(&manifest, VerifyOptions::default()).unwrap();
        let err = comparer.compare(&[tree.path().to_path_buf()]).unwrap_err();
        assert!(matches!(
            err,
            AttestError::AggregateMismatch {
                expected_size: 999,
                actual_size: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_list_does_not_consume_trailer_validation() {
        // A manifest with a garbage trailer still lists cleanly: listing
        // reports recorded metadata and never validates the seal.
        let fixture = VerifyFixture::new(&[("a.txt", b"abc")]);
        let mut bytes = fixture.builder.body();
        bytes.extend(vec![0xFFu8; 48]);
        let manifest = fixture.write_manifest(&bytes);

        let mut comparer = fixture.open(&manifest);
        let totals = comparer.list(&fixture.dirs()).unwrap();
        assert_eq!(totals, Aggregate { count: 1, size: 3 });
    }

    #[test]
    fn test_not_found_error_names_the_recorded_path() {
        let fixture = VerifyFixture::new(&[("deep/nested/file.txt", b"content")]);
        fs::remove_file(fixture.tree.path().join("deep/nested/file.txt")).unwrap();

        let mut comparer = fixture.open(&fixture.manifest());
        match comparer.list(&fixture.dirs()).unwrap_err() {
            AttestError::NotFound { path } => {
                assert_eq!(path, PathBuf::from("deep/nested/file.txt"));
            }
            other => panic!("expected NotFound, got {other}"),
        }
    }
}
