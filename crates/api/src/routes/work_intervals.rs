//! Work interval listing and coverage routes.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use validator::Validate;

use domain::models::{CoverageQuery, CoverageReport, WorkIntervalListQuery, WorkIntervalListResponse};
use domain::services::{build_coverage_report, list_work_intervals};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AuthenticatedCaller;
use crate::middleware::{record_coverage_report, record_listing_served};

/// Flat, sorted and paged listing of raw work intervals.
///
/// GET /api/v1/work-intervals
pub async fn list_intervals(
    State(state): State<AppState>,
    auth: AuthenticatedCaller,
    query: Result<Query<WorkIntervalListQuery>, QueryRejection>,
) -> Result<Json<WorkIntervalListResponse>, ApiError> {
    let Query(query) = query?;
    query.validate()?;

    let caller = auth.caller();
    let limits = state.config.limits.query_limits();
    let response = list_work_intervals(state.intervals.as_ref(), &caller, &query, &limits).await?;

    record_listing_served(response.total);

    Ok(Json(response))
}

/// Coverage and overlap report for a scope and actor set.
///
/// GET /api/v1/work-intervals/coverage
pub async fn coverage(
    State(state): State<AppState>,
    auth: AuthenticatedCaller,
    query: Result<Query<CoverageQuery>, QueryRejection>,
) -> Result<Json<CoverageReport>, ApiError> {
    let Query(query) = query?;
    query.validate()?;

    let caller = auth.caller();
    let limits = state.config.limits.query_limits();
    let report = build_coverage_report(state.intervals.as_ref(), &caller, &query, &limits).await?;

    record_coverage_report(report.filters_applied.scope, report.aggregate.parts_count);

    Ok(Json(report))
}
