//! Finder
//!
//! Glob expansion over the two-level partition tree.

use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::error::{Result, StoreError};
use crate::partition::FILE_EXTENSION;

use super::ResolvedFilters;

/// Collect the partition files matching every (date, identifier) pair
///
/// Pairs are expanded dates-first; matches of each pattern come back in the
/// glob crate's sorted order and are appended without de-duplication.
///
/// Returns `DataDoesNotExist` when nothing matched, and `Config` when `root`
/// cannot be expressed as a glob pattern (non-UTF-8 path).
pub fn find(root: &Path, filters: &ResolvedFilters) -> Result<Vec<PathBuf>> {
    tracing::info!(
        "Load data from vessels {:?} at dates {:?}.",
        filters.identifiers,
        filters.dates
    );

    let root = root.to_str().ok_or_else(|| {
        StoreError::Config(format!("data directory {} is not valid UTF-8", root.display()))
    })?;
    let root_pattern = Pattern::escape(root);
    let mut files = Vec::new();

    for date in &filters.dates {
        for identifier in &filters.identifiers {
            let pattern = format!("{}/{}/{}.{}", root_pattern, date, identifier, FILE_EXTENSION);

            for entry in glob::glob(&pattern)? {
                let path = entry?;
                if path.is_file() {
                    files.push(path);
                }
            }
        }
    }

    tracing::debug!(
        "Matched {} file(s) across {} pattern pair(s)",
        files.len(),
        filters.pair_count()
    );

    if files.is_empty() {
        return Err(StoreError::DataDoesNotExist);
    }

    Ok(files)
}
