//! Partition Store
//!
//! Writes records into the `{root}/{date}/{identifier}.csv` tree.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::Result;
use crate::record::PartitionRecord;

use super::PartitionKey;

/// Persists records to the partitioned file tree
///
/// Stateless apart from the root directory: every call opens, writes and
/// closes its own file handles.
#[derive(Debug, Clone)]
pub struct PartitionStore {
    /// Root of the partition tree
    root: PathBuf,
}

impl PartitionStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the file a record belongs to
    ///
    /// Creates the date directory if it does not exist yet.
    pub fn path_for<R: PartitionRecord + ?Sized>(&self, record: &R) -> Result<PathBuf> {
        let key = PartitionKey::of(record)?;
        let path = self.root.join(key.relative_path());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(path)
    }

    /// Append one row per record, in order
    ///
    /// Records sharing a date and identifier accumulate in the same file in
    /// call order. Rows already written are kept if a later record fails.
    pub fn save<R: PartitionRecord>(&self, records: &[R]) -> Result<()> {
        let identifiers: Vec<String> = records.iter().map(|r| r.identifier()).collect();
        tracing::info!("Saving vessels positions : {:?}", identifiers);

        for record in records {
            let path = self.path_for(record)?;
            self.append_row(&path, &record.to_row())?;
        }

        Ok(())
    }

    /// Root of the partition tree
    pub fn root(&self) -> &Path {
        &self.root
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Open `path` in append mode and write a single CSV row
    fn append_row(&self, path: &Path, row: &[String]) -> Result<()> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(file);

        writer.write_record(row)?;
        writer.flush()?;

        tracing::trace!("Appended row to {}", path.display());
        Ok(())
    }
}
