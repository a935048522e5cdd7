//! Tests for PartitionKey
//!
//! These tests verify:
//! - Key derivation from records
//! - Date directory and file naming
//! - Rejection of identifiers unusable as file names

use std::path::PathBuf;

use chrono::NaiveDate;
use vesselstore::partition::{PartitionKey, DATE_FORMAT};
use vesselstore::{StoreError, VesselPosition};

#[test]
fn test_key_of_record() {
    let timestamp = NaiveDate::from_ymd_opt(2021, 10, 10)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    let record = VesselPosition::new(9231561, timestamp);

    let key = PartitionKey::of(&record).unwrap();

    assert_eq!(key.date, NaiveDate::from_ymd_opt(2021, 10, 10).unwrap());
    assert_eq!(key.identifier, "9231561");
}

#[test]
fn test_date_string_is_zero_padded() {
    let key = PartitionKey::new(NaiveDate::from_ymd_opt(2021, 1, 2).unwrap(), "1").unwrap();

    assert_eq!(key.date_string(), "2021-01-02");
    assert_eq!(DATE_FORMAT, "%Y-%m-%d");
}

#[test]
fn test_relative_path() {
    let key = PartitionKey::new(NaiveDate::from_ymd_opt(2021, 10, 10).unwrap(), "9231561").unwrap();

    assert_eq!(key.file_name(), "9231561.csv");
    assert_eq!(
        key.relative_path(),
        PathBuf::from("2021-10-10").join("9231561.csv")
    );
}

#[test]
fn test_rejects_path_like_identifier() {
    let date = NaiveDate::from_ymd_opt(2021, 10, 10).unwrap();

    let result = PartitionKey::new(date, "../escape");

    assert!(matches!(result, Err(StoreError::InvalidIdentifier(_))));
}
