//! Flat listing query and sort models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::coverage::ScopeParams;

/// Query parameters for the flat work-interval listing.
///
/// All scope parameters are optional here; without them the listing is not
/// restricted by date.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WorkIntervalListQuery {
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
    /// Free-text search over action, ticket and tags.
    #[validate(length(max = 200, message = "Search text must be at most 200 characters"))]
    pub q: Option<String>,
    /// Comma-separated `field:direction` pairs.
    pub sort: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl WorkIntervalListQuery {
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

/// Fields the listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    WorkDate,
    StartTime,
    EndTime,
    Duration,
    ActorName,
    ClientName,
}

impl SortField {
    /// Maps a wire field name to a sortable field; unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "workdate" | "work_date" | "date" => Some(SortField::WorkDate),
            "starttime" | "start_time" | "start" => Some(SortField::StartTime),
            "endtime" | "end_time" | "end" => Some(SortField::EndTime),
            "duration" | "durationminutes" | "duration_minutes" => Some(SortField::Duration),
            "agentname" | "agent_name" | "agent" | "actorname" | "actor_name" | "actor" => {
                Some(SortField::ActorName)
            }
            "clientname" | "client_name" | "client" => Some(SortField::ClientName),
            _ => None,
        }
    }
}

/// Direction of one sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Unrecognized or missing directions mean ascending.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "desc" => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}

/// One `field:direction` component of a sort specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}
