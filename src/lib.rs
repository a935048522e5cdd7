//! # vesselstore
//!
//! Date-partitioned storage for vessel position reports:
//! - One CSV file per vessel per day, append-only
//! - Lookups by vessel, by day, or any combination of both
//! - Free-form date filters ("today", "two days ago", "10/10/2021")
//! - Results bundled in memory, raw or as a single-entry zip
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     VesselRepository                         │
//! │        (save_vessels / get_vessel_file / get_day_file)       │
//! └──────────────┬──────────────────────────────┬───────────────┘
//!                │                              │
//!                ▼                              ▼
//!   ┌────────────────────────┐     ┌────────────────────────────┐
//!   │    PartitionStore      │     │          Lookup            │
//!   │ {root}/{date}/{id}.csv │     │ filters → glob → bundle    │
//!   └───────────┬────────────┘     └─────────────┬──────────────┘
//!               │                                │
//!               ▼                                ▼
//!        ┌─────────────┐                  ┌─────────────┐
//!        │  CSV files  │ ◀─────────────── │  DataFile   │
//!        │  (append)   │     (read)       │ (plain/zip) │
//!        └─────────────┘                  └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod dates;
pub mod partition;
pub mod lookup;
pub mod repository;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StoreError, Result};
pub use config::Config;
pub use lookup::{BundleFormat, DataFile, Filter};
pub use record::{PartitionRecord, VesselPosition};
pub use repository::VesselRepository;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of vesselstore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
