//! Tests for filter normalization
//!
//! These tests verify:
//! - Conversions from absent / single / list values
//! - Wildcards for unfiltered axes
//! - Date strings resolved to partition directory names

use chrono::NaiveDate;
use vesselstore::lookup::{resolve_filters, resolve_filters_at, Filter, WILDCARD};
use vesselstore::StoreError;

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 10, 11).unwrap()
}

// =============================================================================
// Conversion Tests
// =============================================================================

#[test]
fn test_single_values() {
    assert_eq!(Filter::from("9231561"), Filter::Only(vec!["9231561".into()]));
    assert_eq!(Filter::from(9231561u32), Filter::Only(vec!["9231561".into()]));
    assert_eq!(Filter::from(9231561u64), Filter::Only(vec!["9231561".into()]));
    assert_eq!(
        Filter::from(String::from("today")),
        Filter::Only(vec!["today".into()])
    );
}

#[test]
fn test_integer_types() {
    let expected = Filter::Only(vec!["9231561".into()]);

    assert_eq!(Filter::from(9231561), expected);
    assert_eq!(Filter::from(9231561i64), expected);
    assert_eq!(Filter::from(9231561usize), expected);
}

#[test]
fn test_lists() {
    let expected = Filter::Only(vec!["1".into(), "2".into()]);

    assert_eq!(Filter::from(vec![1, 2]), expected);
    assert_eq!(Filter::from(["1", "2"]), expected);
    assert_eq!(Filter::from(&["1", "2"][..]), expected);
}

#[test]
fn test_options() {
    assert_eq!(Filter::from(None::<&str>), Filter::Any);
    assert_eq!(Filter::from(Some("1")), Filter::from("1"));
    assert_eq!(Filter::default(), Filter::Any);
}

#[test]
fn test_empty_list_matches_everything() {
    let empty: Vec<String> = Vec::new();
    let filter = Filter::from(empty);

    assert!(filter.is_any());
    assert_eq!(filter.values(), None);
}

// =============================================================================
// Resolution Tests
// =============================================================================

#[test]
fn test_absent_filters_resolve_to_wildcards() {
    let resolved = resolve_filters(Filter::Any, Filter::Any).unwrap();

    assert_eq!(resolved.identifiers, vec![WILDCARD]);
    assert_eq!(resolved.dates, vec![WILDCARD]);
    assert_eq!(resolved.pair_count(), 1);
}

#[test]
fn test_dates_are_parsed_and_formatted() {
    let resolved = resolve_filters_at(
        Filter::Any,
        Filter::from(vec!["today", "two days ago", "10/01/2021"]),
        reference(),
    )
    .unwrap();

    assert_eq!(resolved.dates, vec!["2021-10-11", "2021-10-09", "2021-10-01"]);
}

#[test]
fn test_identifiers_are_kept_verbatim() {
    let resolved = resolve_filters_at(Filter::from(["93*", "9231561"]), Filter::Any, reference())
        .unwrap();

    assert_eq!(resolved.identifiers, vec!["93*", "9231561"]);
    assert_eq!(resolved.pair_count(), 2);
}

#[test]
fn test_unparseable_date_fails() {
    let result = resolve_filters_at(Filter::Any, Filter::from("not a date"), reference());

    assert!(matches!(result, Err(StoreError::DateParse(_))));
}

#[test]
fn test_path_like_identifier_fails() {
    let result = resolve_filters_at(Filter::from("../secrets"), Filter::Any, reference());

    assert!(matches!(result, Err(StoreError::InvalidIdentifier(_))));
}
