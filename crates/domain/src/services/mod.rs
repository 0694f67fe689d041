//! Domain services for Worktrail.
//!
//! The coverage engine, leaf-first: scope and actor resolution, interval
//! normalization, sweep-line aggregation, daily breakdown and listing sort,
//! plus the storage seam and request-level orchestration.

pub mod actor_resolver;
pub mod coverage_service;
pub mod daily_breakdown;
pub mod interval_normalizer;
pub mod listing_sort;
pub mod scope_resolver;
pub mod sweep_line;
pub mod work_interval_source;

pub use actor_resolver::resolve_actors;
pub use coverage_service::{build_coverage_report, list_work_intervals, QueryLimits};
pub use daily_breakdown::daily_breakdown;
pub use interval_normalizer::{normalize, normalize_all};
pub use listing_sort::{build_listing, parse_sort_spec, sort_items, DEFAULT_SORT};
pub use scope_resolver::{iso_week_bounds, parse_week_iso, resolve_optional_scope, resolve_scope};
pub use sweep_line::{aggregate_intervals, summarize_records};
pub use work_interval_source::{InMemoryWorkIntervalSource, WorkIntervalSource};
