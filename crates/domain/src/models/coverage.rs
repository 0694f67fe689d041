//! Coverage analytics domain models.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::work_interval::DateRange;

// ============================================================================
// Scope
// ============================================================================

/// Caller-selected shape of the date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeKind {
    Day,
    Week,
    Range,
}

impl ScopeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeKind::Day => "day",
            ScopeKind::Week => "week",
            ScopeKind::Range => "range",
        }
    }
}

impl std::str::FromStr for ScopeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(ScopeKind::Day),
            "week" => Ok(ScopeKind::Week),
            "range" => Ok(ScopeKind::Range),
            other => Err(format!("Unknown scope: {}", other)),
        }
    }
}

/// A resolved scope: its kind plus the closed date interval it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateScope {
    pub kind: ScopeKind,
    #[serde(flatten)]
    pub range: DateRange,
}

impl DateScope {
    /// Week and range scopes carry a per-day breakdown.
    pub fn wants_daily_breakdown(&self) -> bool {
        !matches!(self.kind, ScopeKind::Day)
    }
}

/// Raw scope parameters as they arrive from the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeParams {
    pub scope: Option<String>,
    pub date: Option<String>,
    pub week_iso: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Query parameters of the coverage (aggregate) endpoint.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CoverageQuery {
    #[validate(custom(function = "shared::validation::validate_scope_tag"))]
    pub scope: Option<String>,
    #[validate(custom(function = "shared::validation::validate_calendar_date"))]
    pub date: Option<String>,
    #[validate(custom(function = "shared::validation::validate_week_iso"))]
    pub week_iso: Option<String>,
    #[validate(custom(function = "shared::validation::validate_calendar_date"))]
    pub from: Option<String>,
    #[validate(custom(function = "shared::validation::validate_calendar_date"))]
    pub to: Option<String>,
    pub agent_id: Option<String>,
    pub agent_ids: Option<String>,
    pub client_id: Option<Uuid>,
    pub group_id: Option<Uuid>,
    pub type_id: Option<Uuid>,
}

impl CoverageQuery {
    pub fn scope_params(&self) -> ScopeParams {
        ScopeParams {
            scope: self.scope.clone(),
            date: self.date.clone(),
            week_iso: self.week_iso.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }
}

// ============================================================================
// Aggregation results
// ============================================================================

/// A maximal busy span formed by unioning touching or overlapping intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_minutes: i64,
}

/// Idle time strictly between two consecutive merged intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gap {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_minutes: i64,
}

/// Output of one aggregation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub parts_count: usize,
    pub recorded_minutes: i64,
    pub covered_minutes: i64,
    pub overlap_minutes: i64,
    pub merged_intervals: Vec<MergedInterval>,
    pub gaps: Vec<Gap>,
    pub first_start: Option<NaiveDateTime>,
    pub last_end: Option<NaiveDateTime>,
}

/// Scalar coverage figures for one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub date: NaiveDate,
    pub parts_count: usize,
    pub recorded_minutes: i64,
    pub covered_minutes: i64,
    pub overlap_minutes: i64,
}

impl DailySummary {
    pub fn from_aggregate(date: NaiveDate, result: &AggregateResult) -> Self {
        Self {
            date,
            parts_count: result.parts_count,
            recorded_minutes: result.recorded_minutes,
            covered_minutes: result.covered_minutes,
            overlap_minutes: result.overlap_minutes,
        }
    }
}

/// Echo of the filters a report was computed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltersApplied {
    pub scope: ScopeKind,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub agent_ids: Vec<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<Uuid>,
}

/// Response of the coverage endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageReport {
    pub generated_at: DateTime<Utc>,
    pub filters_applied: FiltersApplied,
    #[serde(flatten)]
    pub aggregate: AggregateResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_day: Option<Vec<DailySummary>>,
}
