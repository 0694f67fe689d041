//! Caller roles and resolved actor selections.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use uuid::Uuid;

/// Role of the authenticated caller, as issued by the identity system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActorRole {
    User,
    Editor,
    Admin,
}

impl ActorRole {
    /// Editors and admins may read other actors' records.
    pub fn can_read_others(&self) -> bool {
        matches!(self, ActorRole::Editor | ActorRole::Admin)
    }
}

impl std::fmt::Display for ActorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActorRole::User => write!(f, "USER"),
            ActorRole::Editor => write!(f, "EDITOR"),
            ActorRole::Admin => write!(f, "ADMIN"),
        }
    }
}

impl FromStr for ActorRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USER" => Ok(ActorRole::User),
            "EDITOR" => Ok(ActorRole::Editor),
            "ADMIN" => Ok(ActorRole::Admin),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// The authenticated caller of a coverage or listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub actor_id: Uuid,
    pub role: ActorRole,
}

/// Result of actor resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActorSelection {
    /// Query only these actors.
    Only(BTreeSet<Uuid>),
    /// No actor restriction requested (editor/admin without targets).
    Unrestricted,
}

impl ActorSelection {
    pub fn single(actor_id: Uuid) -> Self {
        ActorSelection::Only(BTreeSet::from([actor_id]))
    }

    /// Aggregates never run across all actors: an open selection falls back
    /// to the caller.
    pub fn or_caller(self, caller: Uuid) -> BTreeSet<Uuid> {
        match self {
            ActorSelection::Only(ids) if !ids.is_empty() => ids,
            _ => BTreeSet::from([caller]),
        }
    }

    /// Actor ids to filter by, `None` meaning no restriction.
    pub fn as_filter(&self) -> Option<BTreeSet<Uuid>> {
        match self {
            ActorSelection::Only(ids) => Some(ids.clone()),
            ActorSelection::Unrestricted => None,
        }
    }
}
