//! Scope resolution.
//!
//! Turns the user-supplied `scope` tag and its companion parameter
//! (`date`, `weekIso` or `from`/`to`) into one closed, date-only interval.

use chrono::{Datelike, Duration, NaiveDate};

use crate::errors::CoverageError;
use crate::models::{DateRange, DateScope, ScopeKind, ScopeParams};
use shared::validation::{parse_calendar_date, WEEK_ISO_PATTERN};

/// Resolves scope parameters to a concrete `[from, to]` interval.
///
/// Errors name the offending parameter. Explicit ranges of any length are
/// accepted unless a `max_range_days` cap is configured.
pub fn resolve_scope(
    params: &ScopeParams,
    max_range_days: Option<i64>,
) -> Result<DateScope, CoverageError> {
    let tag = required(&params.scope, "scope")?;
    let kind: ScopeKind = tag
        .parse()
        .map_err(|_| CoverageError::invalid("scope", "scope must be one of day, week, range"))?;

    let range = match kind {
        ScopeKind::Day => {
            let date = parse_date_param(&params.date, "date")?;
            DateRange { from: date, to: date }
        }
        ScopeKind::Week => {
            let (year, week) = parse_week_iso(required(&params.week_iso, "weekIso")?)?;
            let (from, to) = iso_week_bounds(year, week)
                .ok_or_else(|| CoverageError::invalid("weekIso", "week is out of range"))?;
            DateRange { from, to }
        }
        ScopeKind::Range => {
            let from = parse_date_param(&params.from, "from")?;
            let to = parse_date_param(&params.to, "to")?;
            if from > to {
                return Err(CoverageError::invalid("from", "from must not be after to"));
            }
            let range = DateRange { from, to };
            if let Some(max) = max_range_days.filter(|max| range.days() > *max) {
                return Err(CoverageError::invalid(
                    "to",
                    format!("range must not exceed {} days", max),
                ));
            }
            range
        }
    };

    Ok(DateScope { kind, range })
}

/// Optional date filter for the listing.
///
/// Returns `None` when no scope parameter is present. Without an explicit
/// `scope` tag the kind follows the parameter given: `weekIso`, then
/// `from`/`to`, then `date`.
pub fn resolve_optional_scope(
    params: &ScopeParams,
    max_range_days: Option<i64>,
) -> Result<Option<DateScope>, CoverageError> {
    let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());

    if present(&params.scope) {
        return resolve_scope(params, max_range_days).map(Some);
    }

    let inferred = if present(&params.week_iso) {
        ScopeKind::Week
    } else if present(&params.from) || present(&params.to) {
        ScopeKind::Range
    } else if present(&params.date) {
        ScopeKind::Day
    } else {
        return Ok(None);
    };

    let tagged = ScopeParams {
        scope: Some(inferred.as_str().to_string()),
        ..params.clone()
    };
    resolve_scope(&tagged, max_range_days).map(Some)
}

/// Parses `YYYY-Www` into `(year, week)`, requiring week 1–53.
pub fn parse_week_iso(value: &str) -> Result<(i32, u32), CoverageError> {
    let value = value.trim();
    if !WEEK_ISO_PATTERN.is_match(value) {
        return Err(CoverageError::invalid("weekIso", "weekIso must match YYYY-Www"));
    }

    let (year, week) = value
        .split_once("-W")
        .ok_or_else(|| CoverageError::invalid("weekIso", "weekIso must match YYYY-Www"))?;
    let year: i32 = year
        .parse()
        .map_err(|_| CoverageError::invalid("weekIso", "invalid year"))?;
    let week: u32 = week
        .parse()
        .map_err(|_| CoverageError::invalid("weekIso", "invalid week number"))?;

    if !(1..=53).contains(&week) {
        return Err(CoverageError::invalid(
            "weekIso",
            "week must be between 1 and 53",
        ));
    }

    Ok((year, week))
}

/// Monday and Sunday of ISO week `week` in `year`.
///
/// Week 1 starts on the Monday nearest to January 1st: the signed offset from
/// January 1st to the following Monday, pulled back a week when it exceeds 3
/// days. This puts the year's first Thursday in week 1. Week 53 of a 52-week
/// year resolves to week 1 of the next year.
pub fn iso_week_bounds(year: i32, week: u32) -> Option<(NaiveDate, NaiveDate)> {
    let jan_first = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let weekday = i64::from(jan_first.weekday().num_days_from_monday());

    let mut offset_to_monday = (7 - weekday) % 7;
    if offset_to_monday > 3 {
        offset_to_monday -= 7;
    }

    let first_monday = jan_first.checked_add_signed(Duration::days(offset_to_monday))?;
    let monday =
        first_monday.checked_add_signed(Duration::weeks(i64::from(week.saturating_sub(1))))?;
    let sunday = monday.checked_add_signed(Duration::days(6))?;
    Some((monday, sunday))
}

fn required<'a>(value: &'a Option<String>, parameter: &'static str) -> Result<&'a str, CoverageError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoverageError::invalid(
            parameter,
            format!("{} is required", parameter),
        )),
    }
}

fn parse_date_param(value: &Option<String>, parameter: &'static str) -> Result<NaiveDate, CoverageError> {
    let raw = required(value, parameter)?;
    parse_calendar_date(raw).ok_or_else(|| {
        CoverageError::invalid(parameter, format!("{} must be a YYYY-MM-DD date", parameter))
    })
}
