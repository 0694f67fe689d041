//! Actor resolution.
//!
//! Decides which actors a query may run against, keyed by
//! `(role, single target, multi target)`:
//!
//! | role          | `agentId`        | `agentIds`  | result                 |
//! |---------------|------------------|-------------|------------------------|
//! | USER          | absent or self   | absent      | `{caller}`             |
//! | USER          | anything else    | any         | forbidden              |
//! | USER          | any              | present     | forbidden              |
//! | EDITOR/ADMIN  | present          | any         | `{agentId}`            |
//! | EDITOR/ADMIN  | absent           | valid ids   | parsed ids             |
//! | EDITOR/ADMIN  | absent           | absent      | unrestricted           |
//!
//! Callers running aggregates must collapse an unrestricted selection to the
//! caller with [`ActorSelection::or_caller`].

use std::collections::BTreeSet;
use uuid::Uuid;

use crate::errors::CoverageError;
use crate::models::{ActorSelection, Caller};

/// Resolves the actor selection for `caller`.
///
/// Runs before any storage access so authorization failures never trigger a
/// fetch.
pub fn resolve_actors(
    caller: &Caller,
    agent_id: Option<&str>,
    agent_ids: Option<&str>,
) -> Result<ActorSelection, CoverageError> {
    let agent_id = non_blank(agent_id);
    let agent_ids = non_blank(agent_ids);

    if !caller.role.can_read_others() {
        if agent_ids.is_some() {
            return Err(CoverageError::Forbidden(
                "Multi-actor queries require the EDITOR or ADMIN role".to_string(),
            ));
        }
        // Malformed ids never match the caller
        if let Some(raw) = agent_id {
            if Uuid::parse_str(raw).ok() != Some(caller.actor_id) {
                return Err(CoverageError::Forbidden(
                    "Cannot access another actor's work intervals".to_string(),
                ));
            }
        }
        return Ok(ActorSelection::single(caller.actor_id));
    }

    if let Some(raw) = agent_id {
        return Ok(ActorSelection::single(parse_single(raw)?));
    }

    match agent_ids.map(parse_list) {
        Some(ids) if !ids.is_empty() => Ok(ActorSelection::Only(ids)),
        _ => Ok(ActorSelection::Unrestricted),
    }
}

/// Parses a comma-separated id list, silently skipping invalid entries.
pub fn parse_list(raw: &str) -> BTreeSet<Uuid> {
    raw.split(',')
        .filter_map(|part| Uuid::parse_str(part.trim()).ok())
        .collect()
}

fn parse_single(raw: &str) -> Result<Uuid, CoverageError> {
    Uuid::parse_str(raw).map_err(|_| CoverageError::invalid("agentId", "agentId must be a UUID"))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
