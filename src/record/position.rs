//! Vessel Position
//!
//! One AIS-style position report for a vessel identified by its IMO number.

use chrono::NaiveDateTime;

use super::PartitionRecord;

/// Format of the timestamp column in a position row
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single position report
///
/// Row layout: `imo, timestamp, fields...`
#[derive(Debug, Clone, PartialEq)]
pub struct VesselPosition {
    /// IMO number of the vessel
    pub imo: String,
    /// Time of the report
    pub timestamp: NaiveDateTime,
    /// Remaining columns (latitude, longitude, speed, ...) in row order
    pub fields: Vec<String>,
}

impl VesselPosition {
    pub fn new(imo: impl ToString, timestamp: NaiveDateTime) -> Self {
        Self {
            imo: imo.to_string(),
            timestamp,
            fields: Vec::new(),
        }
    }

    /// Append a column to the row
    pub fn with_field(mut self, value: impl ToString) -> Self {
        self.fields.push(value.to_string());
        self
    }

    /// Append several columns to the row
    pub fn with_fields<I, T>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.fields.extend(values.into_iter().map(|v| v.to_string()));
        self
    }
}

impl PartitionRecord for VesselPosition {
    fn identifier(&self) -> String {
        self.imo.clone()
    }

    fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    fn to_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(self.fields.len() + 2);
        row.push(self.imo.clone());
        row.push(self.timestamp.format(TIMESTAMP_FORMAT).to_string());
        row.extend(self.fields.iter().cloned());
        row
    }
}
