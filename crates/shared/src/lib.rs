//! Shared utilities and common types for the Worktrail backend.
//!
//! This crate provides common functionality used across all other crates:
//! - JWT validation carrying caller identity and role
//! - Page-number pagination
//! - Query parameter validation

pub mod jwt;
pub mod pagination;
pub mod validation;
