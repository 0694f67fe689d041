//! Domain models for Worktrail.

pub mod actor;
pub mod coverage;
pub mod listing;
pub mod work_interval;

pub use actor::{ActorRole, ActorSelection, Caller};
pub use coverage::{
    AggregateResult, CoverageQuery, CoverageReport, DailySummary, DateScope, FiltersApplied, Gap,
    MergedInterval, ScopeKind, ScopeParams,
};
pub use listing::{SortDirection, SortField, SortKey, WorkIntervalListQuery};
pub use work_interval::{
    DateRange, NormalizedInterval, WorkInterval, WorkIntervalFilter, WorkIntervalListItem,
    WorkIntervalListResponse,
};
