//! Work interval entity (database row mapping).

use chrono::{NaiveDate, NaiveTime};
use sqlx::FromRow;
use uuid::Uuid;

/// A `work_intervals` row joined with its display names.
#[derive(Debug, Clone, FromRow)]
pub struct WorkIntervalEntity {
    pub id: Uuid,
    pub actor_id: Uuid,
    pub actor_name: Option<String>,
    pub work_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub client_id: Option<Uuid>,
    pub client_name: Option<String>,
    pub group_id: Option<Uuid>,
    pub group_name: Option<String>,
    pub type_id: Option<Uuid>,
    pub type_name: Option<String>,
    pub ticket_id: Option<String>,
    pub action: Option<String>,
    pub status: Option<String>,
    pub tags: Vec<String>,
}

impl From<WorkIntervalEntity> for domain::models::WorkInterval {
    fn from(entity: WorkIntervalEntity) -> Self {
        Self {
            id: entity.id,
            actor_id: entity.actor_id,
            actor_name: entity.actor_name,
            work_date: entity.work_date,
            start_time: entity.start_time,
            end_time: entity.end_time,
            client_id: entity.client_id,
            client_name: entity.client_name,
            group_id: entity.group_id,
            group_name: entity.group_name,
            type_id: entity.type_id,
            type_name: entity.type_name,
            ticket_id: entity.ticket_id,
            action: entity.action,
            status: entity.status,
            tags: entity.tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::WorkInterval;

    #[test]
    fn test_entity_into_domain() {
        let entity = WorkIntervalEntity {
            id: Uuid::new_v4(),
            actor_id: Uuid::new_v4(),
            actor_name: Some("Dana".to_string()),
            work_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            start_time: NaiveTime::from_hms_opt(8, 0, 0),
            end_time: None,
            client_id: None,
            client_name: None,
            group_id: None,
            group_name: None,
            type_id: None,
            type_name: None,
            ticket_id: Some("OPS-42".to_string()),
            action: None,
            status: Some("open".to_string()),
            tags: vec!["support".to_string()],
        };

        let interval: WorkInterval = entity.clone().into();
        assert_eq!(interval.id, entity.id);
        assert_eq!(interval.actor_name.as_deref(), Some("Dana"));
        assert!(interval.end_time.is_none());
        assert_eq!(interval.tags, vec!["support"]);
    }
}
