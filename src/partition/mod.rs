//! Partition Module
//!
//! Append-only, date-partitioned CSV storage.
//!
//! ## Responsibilities
//! - Derive a partition key (date, identifier) from each record
//! - Map a key to its file, creating the date directory on demand
//! - Append one serialized row per record
//!
//! ## Layout
//! ```text
//! {root}/
//!   ├── 2021-10-10/            (one directory per calendar day)
//!   │     ├── 9231561.csv      (one file per identifier, no header)
//!   │     └── 9321483.csv
//!   └── 2021-10-11/
//!         └── 9231561.csv
//! ```
//!
//! There is no locking: concurrent writers appending to the same file are
//! not synchronized, and a failure midway through `save` leaves the rows
//! written so far in place.

mod key;
mod store;

pub use key::PartitionKey;
pub use store::PartitionStore;

/// Date format of partition directories, shared by writers and lookups
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Extension of partition files
pub const FILE_EXTENSION: &str = "csv";
