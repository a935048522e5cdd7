//! Partition Key
//!
//! Deterministic (date, identifier) pair a record is stored under.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::Result;
use crate::record::{validate_identifier, PartitionRecord};

use super::{DATE_FORMAT, FILE_EXTENSION};

/// Key of a partition file
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartitionKey {
    /// Calendar day of the record's timestamp
    pub date: NaiveDate,
    /// Record identifier, used verbatim as the file stem
    pub identifier: String,
}

impl PartitionKey {
    pub fn new(date: NaiveDate, identifier: impl Into<String>) -> Result<Self> {
        let identifier = identifier.into();
        validate_identifier(&identifier)?;
        Ok(Self { date, identifier })
    }

    /// Derive the key of a record
    pub fn of<R: PartitionRecord + ?Sized>(record: &R) -> Result<Self> {
        Self::new(record.timestamp().date(), record.identifier())
    }

    /// Directory name of the partition's day ("2021-10-10")
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// File name of the partition ("9231561.csv")
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.identifier, FILE_EXTENSION)
    }

    /// Path relative to the store root ("2021-10-10/9231561.csv")
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.date_string()).join(self.file_name())
    }
}
