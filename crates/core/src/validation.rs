//! Field validators shared by the domain and the presentation layer.
//!
//! The terminal front end runs these before calling into the store so it can
//! re-prompt; the store runs them again before applying anything.

use chrono::NaiveDate;

use crate::error::{DomainError, DomainResult};

/// Canonical on-wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse any integer (negative allowed).
pub fn parse_integer(raw: &str) -> DomainResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DomainError::invalid(format!("'{}' is not a whole number", raw.trim())))
}

/// Parse an integer that must be >= 0.
pub fn parse_non_negative(raw: &str) -> DomainResult<u64> {
    let value = parse_integer(raw)?;
    u64::try_from(value)
        .map_err(|_| DomainError::invalid(format!("{value} is negative; expected 0 or more")))
}

/// Parse a `YYYY-MM-DD` string naming a real calendar date.
///
/// The shape is checked strictly (four-digit year, two-digit month and day)
/// before the calendar check, so `2026-2-1` is rejected.
pub fn parse_date(raw: &str) -> DomainResult<NaiveDate> {
    let s = raw.trim();
    let invalid = || DomainError::invalid(format!("'{s}' is not a valid YYYY-MM-DD date"));

    let bytes = s.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| invalid())
}

/// Predicate form of [`parse_date`].
pub fn is_valid_date(raw: &str) -> bool {
    parse_date(raw).is_ok()
}
