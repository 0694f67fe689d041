//! Domain layer for the Worktrail backend.
//!
//! This crate contains:
//! - Domain models (work intervals, coverage results, listing projections)
//! - The coverage engine: scope/actor resolution, normalization, sweep-line
//!   aggregation, daily breakdown, listing sort
//! - The storage seam (`WorkIntervalSource`) and domain error types

pub mod errors;
pub mod models;
pub mod services;

pub use errors::{CoverageError, SourceError};
