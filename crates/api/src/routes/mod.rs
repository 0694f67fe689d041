//! HTTP route handlers.

pub mod health;
pub mod work_intervals;
