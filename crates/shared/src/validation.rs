//! Common validation utilities for query parameters.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

/// Calendar date format accepted on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

lazy_static! {
    /// ISO week string, e.g. `2026-W07` or `2026-W7`.
    pub static ref WEEK_ISO_PATTERN: Regex = Regex::new(r"^\d{4}-W\d{1,2}$").unwrap();
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Validates that a value is a `YYYY-MM-DD` calendar date.
pub fn validate_calendar_date(value: &str) -> Result<(), ValidationError> {
    if parse_calendar_date(value).is_some() {
        Ok(())
    } else {
        let mut err = ValidationError::new("calendar_date");
        err.message = Some("Date must be formatted as YYYY-MM-DD".into());
        Err(err)
    }
}

/// Validates the shape of an ISO week string (`YYYY-Www`).
///
/// The week number range is checked by the scope resolver.
pub fn validate_week_iso(value: &str) -> Result<(), ValidationError> {
    if WEEK_ISO_PATTERN.is_match(value.trim()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("week_iso");
        err.message = Some("weekIso must match YYYY-Www".into());
        Err(err)
    }
}

/// Validates a scope tag (`day`, `week` or `range`).
pub fn validate_scope_tag(value: &str) -> Result<(), ValidationError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "day" | "week" | "range" => Ok(()),
        _ => {
            let mut err = ValidationError::new("scope");
            err.message = Some("scope must be one of day, week, range".into());
            Err(err)
        }
    }
}
