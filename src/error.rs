//! Error types for vesselstore
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Unified error type for vesselstore operations
#[derive(Debug, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Encoding Errors
    // -------------------------------------------------------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("No data has been found with the given filters.")]
    DataDoesNotExist,

    #[error("Invalid lookup pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to read matched path: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Unable to parse date: {0:?}")]
    DateParse(String),

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// True when a lookup matched no partition file
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::DataDoesNotExist)
    }
}
