//! Repository Module
//!
//! Entry points that tie the partition store and the lookup together.
//!
//! ## Responsibilities
//! - Own the configured root directory (no process-wide instance)
//! - Append incoming positions to the partition tree
//! - Answer lookups by vessel, by day, or by any combination of both

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::lookup::{self, BundleFormat, DataFile, Filter, ResolvedFilters};
use crate::partition::PartitionStore;
use crate::record::PartitionRecord;

/// Day used by [`VesselRepository::get_today_file`]
pub const DEFAULT_DAY: &str = "today";

/// Date-partitioned vessel position repository
///
/// Stateless apart from the file tree under `config.data_dir`; any number
/// of instances may point at different (or the same) roots.
pub struct VesselRepository {
    /// Repository configuration
    config: Config,

    /// Writer for the partition tree
    store: PartitionStore,
}

impl VesselRepository {
    /// Open or create a repository with the given config
    pub fn open(config: Config) -> Result<Self> {
        if config.data_dir.exists() && !config.data_dir.is_dir() {
            return Err(StoreError::Config(format!(
                "data directory {} is not a directory",
                config.data_dir.display()
            )));
        }

        // Lookups glob over the root as text
        if config.data_dir.to_str().is_none() {
            return Err(StoreError::Config(format!(
                "data directory {} is not valid UTF-8",
                config.data_dir.display()
            )));
        }

        fs::create_dir_all(&config.data_dir)?;

        let store = PartitionStore::new(&config.data_dir);
        Ok(Self { config, store })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().data_dir(path).build();
        Self::open(config)
    }

    // =========================================================================
    // Ingestion
    // =========================================================================

    /// Append positions to their partition files
    pub fn save_vessels<R: PartitionRecord>(&self, records: &[R]) -> Result<()> {
        self.store.save(records)
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Every stored position of one vessel, across all days
    ///
    /// Returns `DataDoesNotExist` if the vessel was never saved.
    pub fn get_vessel_file(&self, imo: impl Into<Filter>) -> Result<DataFile> {
        let imo = imo.into();
        tracing::info!("Load vessel {:?}'s historic", imo);

        self.get_data_file(imo, Filter::Any)
    }

    /// Every position stored for one day, across all vessels
    ///
    /// `date_string` accepts free-form input ("today", "two days ago",
    /// "10/10/2021", ...).
    pub fn get_day_file(&self, date_string: &str) -> Result<DataFile> {
        tracing::info!("Load {}'s historic", date_string);

        self.get_data_file(Filter::Any, date_string)
    }

    /// Positions stored today
    pub fn get_today_file(&self) -> Result<DataFile> {
        self.get_day_file(DEFAULT_DAY)
    }

    /// Positions matching both filters, packaged per the configured format
    ///
    /// An absent filter matches everything on its axis.
    pub fn get_data_file(
        &self,
        imos: impl Into<Filter>,
        date_strings: impl Into<Filter>,
    ) -> Result<DataFile> {
        self.get_data_file_as(imos, date_strings, self.config.bundle_format)
    }

    /// Same as [`get_data_file`](Self::get_data_file) with an explicit format
    pub fn get_data_file_as(
        &self,
        imos: impl Into<Filter>,
        date_strings: impl Into<Filter>,
        format: BundleFormat,
    ) -> Result<DataFile> {
        let files = self.find_files(imos, date_strings)?;
        lookup::bundle(&files, format)
    }

    /// Partition files matching both filters, in lookup order
    pub fn find_files(
        &self,
        imos: impl Into<Filter>,
        date_strings: impl Into<Filter>,
    ) -> Result<Vec<PathBuf>> {
        let filters = lookup::resolve_filters(imos.into(), date_strings.into())?;
        self.find_resolved(&filters)
    }

    /// Like [`find_files`](Self::find_files), resolving relative dates against `today`
    pub fn find_files_at(
        &self,
        imos: impl Into<Filter>,
        date_strings: impl Into<Filter>,
        today: NaiveDate,
    ) -> Result<Vec<PathBuf>> {
        let filters = lookup::resolve_filters_at(imos.into(), date_strings.into(), today)?;
        self.find_resolved(&filters)
    }

    fn find_resolved(&self, filters: &ResolvedFilters) -> Result<Vec<PathBuf>> {
        lookup::find(self.store.root(), filters)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    /// Get the partition store
    pub fn store(&self) -> &PartitionStore {
        &self.store
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
