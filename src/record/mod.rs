//! Record Module
//!
//! The seam between the producers of position data and the partition store.
//!
//! ## Responsibilities
//! - Expose the identifier and timestamp a record is partitioned by
//! - Flatten a record into one CSV row
//! - Reject identifiers that cannot be used as file names
//! - Read positions from CSV input

mod ingest;
mod position;

pub use ingest::{parse_timestamp, read_positions};
pub use position::{VesselPosition, TIMESTAMP_FORMAT};

use chrono::NaiveDateTime;

use crate::error::{Result, StoreError};

/// A record that can be stored in the partition tree
///
/// Implementors decide which columns make up a row; the store only uses
/// `identifier` and `timestamp` to pick the file the row lands in.
pub trait PartitionRecord {
    /// Identifier of the real-world entity (one file per identifier per day)
    fn identifier(&self) -> String;

    /// Moment the record was observed
    fn timestamp(&self) -> NaiveDateTime;

    /// Ordered fields written as one CSV row
    fn to_row(&self) -> Vec<String>;
}

impl<R: PartitionRecord + ?Sized> PartitionRecord for &R {
    fn identifier(&self) -> String {
        (**self).identifier()
    }

    fn timestamp(&self) -> NaiveDateTime {
        (**self).timestamp()
    }

    fn to_row(&self) -> Vec<String> {
        (**self).to_row()
    }
}

/// Check that an identifier is usable as a single path component
pub fn validate_identifier(identifier: &str) -> Result<()> {
    let invalid = identifier.trim().is_empty()
        || identifier == "."
        || identifier == ".."
        || identifier.contains(|c: char| matches!(c, '/' | '\\' | '\0'));

    if invalid {
        return Err(StoreError::InvalidIdentifier(identifier.to_string()));
    }

    Ok(())
}
