//! Domain error types.

use thiserror::Error;

/// Failure reported by the work-interval storage collaborator.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage query failed: {0}")]
    Query(String),
}

/// Errors raised while resolving and computing coverage reports.
#[derive(Debug, Clone, Error)]
pub enum CoverageError {
    /// Malformed or missing scope/actor parameter.
    #[error("Invalid parameter '{parameter}': {message}")]
    InvalidInput {
        parameter: &'static str,
        message: String,
    },

    /// Caller is not allowed to read the requested actors.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The single upstream fetch failed; never retried here.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl CoverageError {
    pub fn invalid(parameter: &'static str, message: impl Into<String>) -> Self {
        CoverageError::InvalidInput {
            parameter,
            message: message.into(),
        }
    }
}
