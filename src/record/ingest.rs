//! Position Ingestion
//!
//! Reads `imo, timestamp, fields...` CSV rows into vessel positions.

use std::io::Read;

use chrono::{DateTime, NaiveDateTime};
use csv::ReaderBuilder;

use crate::error::{Result, StoreError};

use super::{VesselPosition, TIMESTAMP_FORMAT};

/// Parse every row of `reader` into a position
///
/// Rows may have any number of trailing fields but need at least an imo and
/// a timestamp. Row numbers in errors are 1-based and exclude the header.
pub fn read_positions<R: Read>(reader: R, has_header: bool) -> Result<Vec<VesselPosition>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .from_reader(reader);

    let mut positions = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        let line = index + 1;

        let (imo, timestamp) = match (row.get(0), row.get(1)) {
            (Some(imo), Some(timestamp)) => (imo, timestamp),
            _ => {
                return Err(StoreError::InvalidInput(format!(
                    "row {} needs at least an imo and a timestamp",
                    line
                )))
            }
        };

        let timestamp = parse_timestamp(timestamp).ok_or_else(|| {
            StoreError::InvalidInput(format!("row {}: invalid timestamp {:?}", line, timestamp))
        })?;

        positions.push(VesselPosition::new(imo, timestamp).with_fields(row.iter().skip(2)));
    }

    Ok(positions)
}

/// Row timestamp, RFC 3339 offsets converted to UTC
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.naive_utc()))
}
