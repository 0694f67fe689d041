//! Persistence layer for the Worktrail backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - The PostgreSQL `WorkIntervalSource` implementation
//! - Query metrics

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
