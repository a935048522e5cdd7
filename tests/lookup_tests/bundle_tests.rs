//! Tests for bundle / DataFile
//!
//! These tests verify:
//! - Raw concatenation in path order
//! - Single-entry zip packaging
//! - Reading the buffer from its start
//! - I/O errors on unreadable paths

use std::fs;
use std::io::{BufRead, Cursor, Read, Seek, SeekFrom};
use std::path::PathBuf;

use tempfile::TempDir;
use vesselstore::lookup::{bundle, BundleFormat, DataFile, ARCHIVE_ENTRY_NAME};
use vesselstore::StoreError;
use zip::ZipArchive;

// =============================================================================
// Helper Functions
// =============================================================================

fn write_files(contents: &[&str]) -> (TempDir, Vec<PathBuf>) {
    let temp_dir = TempDir::new().unwrap();
    let paths = contents
        .iter()
        .enumerate()
        .map(|(i, content)| {
            let path = temp_dir.path().join(format!("{}.csv", i));
            fs::write(&path, content).unwrap();
            path
        })
        .collect();
    (temp_dir, paths)
}

fn unzip(data: &[u8]) -> (Vec<String>, Vec<u8>) {
    let mut archive = ZipArchive::new(Cursor::new(data)).unwrap();
    let names = archive.file_names().map(|n| n.to_string()).collect();

    let mut entry = archive.by_name(ARCHIVE_ENTRY_NAME).unwrap();
    let mut content = Vec::new();
    entry.read_to_end(&mut content).unwrap();

    (names, content)
}

// =============================================================================
// Plain Tests
// =============================================================================

#[test]
fn test_plain_concatenates_in_order() {
    let (_temp, paths) = write_files(&["b,2\n", "a,1\n", "c,3\n"]);

    let data = bundle(&paths, BundleFormat::Plain).unwrap();

    assert_eq!(data.as_bytes(), b"b,2\na,1\nc,3\n");
    assert_eq!(data.format(), BundleFormat::Plain);
    assert_eq!(data.len(), 12);
}

#[test]
fn test_plain_adds_no_separator() {
    let (_temp, paths) = write_files(&["no-newline", "next\n"]);

    let data = bundle(&paths, BundleFormat::Plain).unwrap();

    assert_eq!(data.as_bytes(), b"no-newlinenext\n");
}

#[test]
fn test_plain_repeats_duplicate_paths() {
    let (_temp, mut paths) = write_files(&["x\n"]);
    paths.push(paths[0].clone());

    let data = bundle(&paths, BundleFormat::Plain).unwrap();

    assert_eq!(data.as_bytes(), b"x\nx\n");
}

#[test]
fn test_plain_without_paths_is_empty() {
    let data = bundle(&[], BundleFormat::Plain).unwrap();

    assert!(data.is_empty());
}

// =============================================================================
// Zip Tests
// =============================================================================

#[test]
fn test_zip_single_entry_matches_plain() {
    let (_temp, paths) = write_files(&["1,a\n", "2,b\n"]);

    let plain = bundle(&paths, BundleFormat::Plain).unwrap();
    let zipped = bundle(&paths, BundleFormat::Zip).unwrap();

    let (names, content) = unzip(zipped.as_bytes());
    assert_eq!(names, vec![ARCHIVE_ENTRY_NAME]);
    assert_eq!(content, plain.as_bytes());
    assert_eq!(zipped.format(), BundleFormat::Zip);
}

#[test]
fn test_zip_starts_with_local_header_signature() {
    let (_temp, paths) = write_files(&["1,a\n"]);

    let zipped = bundle(&paths, BundleFormat::Zip).unwrap();

    assert_eq!(&zipped.as_bytes()[..4], b"PK\x03\x04");
}

#[test]
fn test_default_format_is_zip() {
    assert_eq!(BundleFormat::default(), BundleFormat::Zip);
}

// =============================================================================
// Reader Tests
// =============================================================================

#[test]
fn test_data_file_reads_from_start() {
    let (_temp, paths) = write_files(&["1,a\n", "2,b\n"]);
    let mut data = bundle(&paths, BundleFormat::Plain).unwrap();

    let mut content = String::new();
    data.read_to_string(&mut content).unwrap();

    assert_eq!(content, "1,a\n2,b\n");
}

#[test]
fn test_data_file_lines_and_seek() {
    let (_temp, paths) = write_files(&["1,a\n2,b\n"]);
    let mut data = bundle(&paths, BundleFormat::Plain).unwrap();

    let lines: Vec<String> = (&mut data).lines().map(|l| l.unwrap()).collect();
    assert_eq!(lines, vec!["1,a", "2,b"]);

    data.seek(SeekFrom::Start(0)).unwrap();
    let mut first = [0u8; 3];
    data.read_exact(&mut first).unwrap();
    assert_eq!(&first, b"1,a");

    // Reading does not affect the whole-buffer view
    assert_eq!(data.as_bytes(), b"1,a\n2,b\n");
}

#[test]
fn test_zip_data_file_is_readable_archive() {
    let (_temp, paths) = write_files(&["1,a\n"]);
    let data = bundle(&paths, BundleFormat::Zip).unwrap();

    let mut archive = ZipArchive::new(data).unwrap();

    assert_eq!(archive.len(), 1);
    let mut content = String::new();
    archive
        .by_index(0)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    assert_eq!(content, "1,a\n");
}

#[test]
fn test_from_bytes_round_trip() {
    let data = DataFile::from_bytes(bytes::Bytes::from_static(b"abc"), BundleFormat::Plain);

    assert_eq!(data.clone().into_bytes(), bytes::Bytes::from_static(b"abc"));
    assert_eq!(data.len(), 3);
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_missing_file_is_io_error() {
    let (temp, mut paths) = write_files(&["1,a\n"]);
    paths.push(temp.path().join("missing.csv"));

    let result = bundle(&paths, BundleFormat::Plain);

    assert!(matches!(result, Err(StoreError::Io(_))));
}
