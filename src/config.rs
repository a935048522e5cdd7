//! Configuration for vesselstore
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::lookup::BundleFormat;

/// Main configuration for a repository instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory of the partition tree
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── 2021-10-10/
    ///     │     ├── 9231561.csv
    ///     │     └── 9321483.csv
    ///     └── 2021-10-11/
    ///           └── 9231561.csv
    pub data_dir: PathBuf,

    // -------------------------------------------------------------------------
    // Lookup Configuration
    // -------------------------------------------------------------------------
    /// Packaging used by the lookup entry points
    pub bundle_format: BundleFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data/csv"),
            bundle_format: BundleFormat::Zip,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root of the partition tree)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the packaging of lookup results
    pub fn bundle_format(mut self, format: BundleFormat) -> Self {
        self.config.bundle_format = format;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
