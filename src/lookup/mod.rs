//! Lookup Module
//!
//! Resolves filter criteria to partition files and bundles their contents.
//!
//! ## Responsibilities
//! - Normalize identifier/date filters (absent, single value or list)
//! - Expand the cartesian product of (date, identifier) patterns
//! - Glob the partition tree for every pattern pair
//! - Concatenate matched files into one in-memory buffer, optionally zipped
//!
//! ## Flow
//! ```text
//!   identifiers? ─┐
//!                 ├─▶ resolve_filters ─▶ find ─▶ bundle ─▶ DataFile
//!   dates?       ─┘   (wildcards, date    (glob)   (concat / zip)
//!                      parsing)
//! ```
//!
//! Matches from overlapping patterns are not de-duplicated: a file matched
//! by two pairs is read twice.

mod bundle;
mod filter;
mod finder;

pub use bundle::{bundle, BundleFormat, DataFile, ARCHIVE_ENTRY_NAME};
pub use filter::{resolve_filters, resolve_filters_at, Filter, ResolvedFilters, WILDCARD};
pub use finder::find;
