//! Storage seam for raw work-interval records.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::errors::SourceError;
use crate::models::{WorkInterval, WorkIntervalFilter};

/// Supplies raw records to the coverage engine.
///
/// Implementations own any retry policy; callers issue at most one `fetch`
/// per request.
#[async_trait::async_trait]
pub trait WorkIntervalSource: Send + Sync {
    /// Fetch every record matching `filter`.
    async fn fetch(&self, filter: &WorkIntervalFilter) -> Result<Vec<WorkInterval>, SourceError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), SourceError>;
}

/// In-memory source for development and testing.
#[derive(Debug, Default)]
pub struct InMemoryWorkIntervalSource {
    records: RwLock<Vec<WorkInterval>>,
    /// Whether to simulate an unavailable store.
    pub simulate_failure: bool,
    fetches: AtomicUsize,
}

impl InMemoryWorkIntervalSource {
    /// Create a source seeded with `records`.
    pub fn new(records: Vec<WorkInterval>) -> Self {
        Self {
            records: RwLock::new(records),
            simulate_failure: false,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Create a source whose every call fails.
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    /// Append a record.
    pub fn insert(&self, record: WorkInterval) {
        if let Ok(mut records) = self.records.write() {
            records.push(record);
        }
    }

    /// Number of `fetch` calls served so far, failed ones included.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl WorkIntervalSource for InMemoryWorkIntervalSource {
    async fn fetch(&self, filter: &WorkIntervalFilter) -> Result<Vec<WorkInterval>, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if self.simulate_failure {
            tracing::warn!("In-memory work interval source simulating failure");
            return Err(SourceError::Unavailable("Simulated failure".to_string()));
        }

        let records = self
            .records
            .read()
            .map_err(|_| SourceError::Query("Record store lock poisoned".to_string()))?;

        let matched: Vec<WorkInterval> = records
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();

        tracing::debug!(
            matched = matched.len(),
            total = records.len(),
            "In-memory fetch served"
        );

        Ok(matched)
    }

    async fn ping(&self) -> Result<(), SourceError> {
        if self.simulate_failure {
            return Err(SourceError::Unavailable("Simulated failure".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DateRange;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;
    use uuid::Uuid;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_applies_filter() {
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let source = InMemoryWorkIntervalSource::new(vec![
            WorkInterval::new(alice, date(4), None, None),
            WorkInterval::new(alice, date(9), None, None),
            WorkInterval::new(bob, date(4), None, None),
        ]);

        let filter = WorkIntervalFilter {
            date_range: Some(DateRange {
                from: date(1),
                to: date(7),
            }),
            actor_ids: Some(BTreeSet::from([alice])),
            ..Default::default()
        };

        let records = source.fetch(&filter).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].actor_id, alice);
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_insert_is_visible_to_fetch() {
        let source = InMemoryWorkIntervalSource::default();
        source.insert(WorkInterval::new(Uuid::new_v4(), date(1), None, None));
        let records = source.fetch(&WorkIntervalFilter::default()).await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(source.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_failing_source() {
        let source = InMemoryWorkIntervalSource::failing();
        let result = source.fetch(&WorkIntervalFilter::default()).await;
        assert!(matches!(result, Err(SourceError::Unavailable(_))));
        assert!(source.ping().await.is_err());
        assert_eq!(source.fetch_count(), 1);
    }
}
