//! Repository implementations for database operations.

pub mod work_interval;

pub use work_interval::PgWorkIntervalRepository;
