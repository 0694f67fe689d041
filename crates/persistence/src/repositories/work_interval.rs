//! Work interval repository backed by PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use domain::models::{WorkInterval, WorkIntervalFilter};
use domain::services::WorkIntervalSource;
use domain::SourceError;

use crate::entities::WorkIntervalEntity;
use crate::metrics::{record_pool_metrics, record_rows_fetched, QueryTimer};

/// Repository for work interval reads.
#[derive(Clone)]
pub struct PgWorkIntervalRepository {
    pool: PgPool,
}

impl PgWorkIntervalRepository {
    /// Creates a new PgWorkIntervalRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Fetch every interval matching `filter`, joined with display names.
    pub async fn find_matching(
        &self,
        filter: &WorkIntervalFilter,
    ) -> Result<Vec<WorkIntervalEntity>, sqlx::Error> {
        let timer = QueryTimer::new("fetch_work_intervals");

        let actor_ids: Option<Vec<Uuid>> = filter
            .actor_ids
            .as_ref()
            .map(|ids| ids.iter().copied().collect());
        let search = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let rows = sqlx::query_as::<_, WorkIntervalEntity>(
            r#"
            SELECT
                wi.id, wi.actor_id, a.display_name as actor_name,
                wi.work_date, wi.start_time, wi.end_time,
                wi.client_id, c.name as client_name,
                wi.group_id, g.name as group_name,
                wi.type_id, t.name as type_name,
                wi.ticket_id, wi.action, wi.status, wi.tags
            FROM work_intervals wi
            LEFT JOIN actors a ON a.id = wi.actor_id
            LEFT JOIN clients c ON c.id = wi.client_id
            LEFT JOIN work_groups g ON g.id = wi.group_id
            LEFT JOIN work_types t ON t.id = wi.type_id
            WHERE ($1::date IS NULL OR wi.work_date >= $1)
              AND ($2::date IS NULL OR wi.work_date <= $2)
              AND ($3::uuid[] IS NULL OR wi.actor_id = ANY($3))
              AND ($4::uuid IS NULL OR wi.client_id = $4)
              AND ($5::uuid IS NULL OR wi.group_id = $5)
              AND ($6::uuid IS NULL OR wi.type_id = $6)
              AND ($7::text IS NULL
                   OR position($7 in lower(coalesce(wi.action, ''))) > 0
                   OR position($7 in lower(coalesce(wi.ticket_id, ''))) > 0
                   OR EXISTS (SELECT 1 FROM unnest(wi.tags) tag
                              WHERE position($7 in lower(tag)) > 0))
            ORDER BY wi.work_date, wi.start_time NULLS LAST, wi.id
            "#,
        )
        .bind(filter.date_range.map(|r| r.from))
        .bind(filter.date_range.map(|r| r.to))
        .bind(actor_ids)
        .bind(filter.client_id)
        .bind(filter.group_id)
        .bind(filter.type_id)
        .bind(search)
        .fetch_all(&self.pool)
        .await?;

        timer.record();
        record_rows_fetched("fetch_work_intervals", rows.len());

        Ok(rows)
    }
}

#[async_trait]
impl WorkIntervalSource for PgWorkIntervalRepository {
    async fn fetch(&self, filter: &WorkIntervalFilter) -> Result<Vec<WorkInterval>, SourceError> {
        let rows = self.find_matching(filter).await.map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(WorkInterval::from).collect())
    }

    async fn ping(&self) -> Result<(), SourceError> {
        record_pool_metrics(&self.pool);
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(map_sqlx_error)
    }
}

/// Connection-level failures mean the store is unavailable; anything else is
/// a failed query.
fn map_sqlx_error(err: sqlx::Error) -> SourceError {
    tracing::error!(error = %err, "Work interval query failed");
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            SourceError::Unavailable(err.to_string())
        }
        other => SourceError::Query(other.to_string()),
    }
}
