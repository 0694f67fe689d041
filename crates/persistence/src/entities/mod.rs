//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod work_interval;

pub use work_interval::WorkIntervalEntity;
