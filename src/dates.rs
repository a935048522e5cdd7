//! Free-form Date Parsing
//!
//! Turns human input such as "today", "two days ago" or "10/10/2021" into a
//! calendar day. Relative expressions are anchored on a reference day so the
//! result is deterministic; [`parse_day`] anchors on the local current day.

use chrono::{Datelike, Days, Local, Months, NaiveDate, NaiveDateTime};

use crate::error::{Result, StoreError};

/// Explicit date layouts, tried in order.
///
/// `%Y` alone accepts 1-4 digits, so every match must also carry the year
/// as a four-digit token (see `has_full_year`).
///
/// Slash dates are read month-first, falling back to day-first when the
/// month-first reading is not a valid date.
const DATE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
];

const DATE_TIME_LAYOUTS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse `input` relative to the local current day
pub fn parse_day(input: &str) -> Result<NaiveDate> {
    parse_day_at(input, Local::now().date_naive())
}

/// Parse `input`, resolving relative expressions against `today`
pub fn parse_day_at(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let normalized = input.trim().to_ascii_lowercase();
    let normalized = normalized.split_whitespace().collect::<Vec<_>>().join(" ");

    let parsed = parse_keyword(&normalized, today)
        .or_else(|| parse_relative(&normalized, today))
        .or_else(|| parse_explicit(&normalized));

    parsed.ok_or_else(|| StoreError::DateParse(input.to_string()))
}

// =============================================================================
// Keywords
// =============================================================================

fn parse_keyword(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    match input {
        "today" | "now" => Some(today),
        "yesterday" => today.checked_sub_days(Days::new(1)),
        "tomorrow" => today.checked_add_days(Days::new(1)),
        "day before yesterday" | "the day before yesterday" => {
            today.checked_sub_days(Days::new(2))
        }
        "day after tomorrow" | "the day after tomorrow" => today.checked_add_days(Days::new(2)),
        _ => None,
    }
}

// =============================================================================
// Relative Expressions ("3 days ago", "in a week")
// =============================================================================

#[derive(Debug, Clone, Copy)]
enum Unit {
    Day,
    Week,
    Month,
    Year,
}

fn parse_relative(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let tokens: Vec<&str> = input.split(' ').collect();

    match tokens.as_slice() {
        [count, unit, "ago"] => shift(today, parse_count(count)?, parse_unit(unit)?, false),
        ["in", count, unit] => shift(today, parse_count(count)?, parse_unit(unit)?, true),
        _ => None,
    }
}

fn parse_count(token: &str) -> Option<u32> {
    if let Ok(n) = token.parse::<u32>() {
        return Some(n);
    }

    let n = match token {
        "a" | "an" | "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        _ => return None,
    };
    Some(n)
}

fn parse_unit(token: &str) -> Option<Unit> {
    match token.strip_suffix('s').unwrap_or(token) {
        "day" => Some(Unit::Day),
        "week" => Some(Unit::Week),
        "month" => Some(Unit::Month),
        "year" => Some(Unit::Year),
        _ => None,
    }
}

fn shift(today: NaiveDate, count: u32, unit: Unit, forward: bool) -> Option<NaiveDate> {
    match unit {
        Unit::Day | Unit::Week => {
            let days = match unit {
                Unit::Week => u64::from(count) * 7,
                _ => u64::from(count),
            };
            if forward {
                today.checked_add_days(Days::new(days))
            } else {
                today.checked_sub_days(Days::new(days))
            }
        }
        Unit::Month | Unit::Year => {
            let months = match unit {
                Unit::Year => count.checked_mul(12)?,
                _ => count,
            };
            if forward {
                today.checked_add_months(Months::new(months))
            } else {
                today.checked_sub_months(Months::new(months))
            }
        }
    }
}

// =============================================================================
// Explicit Dates
// =============================================================================

fn parse_explicit(input: &str) -> Option<NaiveDate> {
    if let Some(date) = DATE_LAYOUTS
        .iter()
        .filter_map(|layout| NaiveDate::parse_from_str(input, layout).ok())
        .find(|date| has_full_year(input, *date))
    {
        return Some(date);
    }

    if let Some(date) = parse_compact(input) {
        return Some(date);
    }

    // Date-times use uppercase "T"/"Z" separators
    let upper = input.to_ascii_uppercase();

    if let Some(date_time) = DATE_TIME_LAYOUTS
        .iter()
        .filter_map(|layout| NaiveDateTime::parse_from_str(&upper, layout).ok())
        .find(|date_time| has_full_year(&upper, date_time.date()))
    {
        return Some(date_time.date());
    }

    chrono::DateTime::parse_from_rfc3339(&upper)
        .ok()
        .map(|dt| dt.date_naive())
}

/// True when `input` spells the year of `date` as its own four-digit token
fn has_full_year(input: &str, date: NaiveDate) -> bool {
    input
        .split(|c: char| !c.is_ascii_digit())
        .any(|token| token.len() == 4 && token.parse::<i32>().ok() == Some(date.year()))
}

/// "20211010"
fn parse_compact(input: &str) -> Option<NaiveDate> {
    if input.len() != 8 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year = input[0..4].parse().ok()?;
    let month = input[4..6].parse().ok()?;
    let day = input[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
