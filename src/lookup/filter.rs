//! Filters
//!
//! Normalization of identifier and date filters into glob pattern lists.

use chrono::NaiveDate;

use crate::dates;
use crate::error::Result;
use crate::partition::DATE_FORMAT;
use crate::record::validate_identifier;

/// Pattern matching any identifier or any date directory
pub const WILDCARD: &str = "*";

/// A filter on one lookup axis (identifiers or dates)
///
/// Callers may pass nothing, a single value or a list; an empty list
/// matches everything, like an absent filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    /// No restriction
    #[default]
    Any,
    /// Only the listed values
    Only(Vec<String>),
}

impl Filter {
    /// Collapse empty lists into `Any`
    pub fn values(&self) -> Option<&[String]> {
        match self {
            Filter::Only(values) if !values.is_empty() => Some(values.as_slice()),
            _ => None,
        }
    }

    pub fn is_any(&self) -> bool {
        self.values().is_none()
    }
}

impl From<&str> for Filter {
    fn from(value: &str) -> Self {
        Filter::Only(vec![value.to_string()])
    }
}

impl From<String> for Filter {
    fn from(value: String) -> Self {
        Filter::Only(vec![value])
    }
}

impl From<&String> for Filter {
    fn from(value: &String) -> Self {
        Filter::Only(vec![value.clone()])
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Filter {
                fn from(value: $ty) -> Self {
                    Filter::Only(vec![value.to_string()])
                }
            }
        )*
    };
}

impl_from_integer!(u16, u32, u64, usize, i32, i64);

impl<T: ToString> From<Vec<T>> for Filter {
    fn from(values: Vec<T>) -> Self {
        Filter::Only(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<T: ToString> From<&[T]> for Filter {
    fn from(values: &[T]) -> Self {
        Filter::Only(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<T: ToString, const N: usize> From<[T; N]> for Filter {
    fn from(values: [T; N]) -> Self {
        Filter::Only(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<F: Into<Filter>> From<Option<F>> for Filter {
    fn from(value: Option<F>) -> Self {
        value.map(Into::into).unwrap_or(Filter::Any)
    }
}

/// Filters normalized to non-empty pattern lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFilters {
    /// File stem patterns (`*` when unfiltered)
    pub identifiers: Vec<String>,
    /// Date directory names in `DATE_FORMAT` (`*` when unfiltered)
    pub dates: Vec<String>,
}

impl ResolvedFilters {
    /// Number of (date, identifier) pattern pairs to glob
    pub fn pair_count(&self) -> usize {
        self.dates.len() * self.identifiers.len()
    }
}

/// Normalize filters, resolving relative dates against the local current day
pub fn resolve_filters(identifiers: Filter, dates: Filter) -> Result<ResolvedFilters> {
    resolve_filters_at(identifiers, dates, chrono::Local::now().date_naive())
}

/// Normalize filters, resolving relative dates against `today`
///
/// Date strings go through the free-form parser and are formatted exactly
/// as partition directories are named when writing.
pub fn resolve_filters_at(
    identifiers: Filter,
    dates: Filter,
    today: NaiveDate,
) -> Result<ResolvedFilters> {
    let dates = match dates.values() {
        Some(values) => values
            .iter()
            .map(|value| {
                dates::parse_day_at(value, today).map(|day| day.format(DATE_FORMAT).to_string())
            })
            .collect::<Result<Vec<_>>>()?,
        None => vec![WILDCARD.to_string()],
    };

    let identifiers = match identifiers.values() {
        Some(values) => {
            for value in values {
                validate_identifier(value)?;
            }
            values.to_vec()
        }
        None => vec![WILDCARD.to_string()],
    };

    Ok(ResolvedFilters { identifiers, dates })
}
