//! Click statistics service.

use std::sync::Arc;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use serde::Serialize;

/// Aggregate statistics over the whole registry.
///
/// Computed from one point-in-time snapshot, so `total_clicks` always equals
/// the sum of `click_count` over the mappings that snapshot contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    /// Number of registered mappings.
    pub count: i64,
    /// Sum of click counts across all mappings.
    pub total_clicks: i64,
    /// Code with the highest click count; ties go to the first created.
    /// `None` when the registry is empty.
    pub most_clicked: Option<String>,
    /// `total_clicks / count`, truncated toward zero. Truncation mirrors the
    /// behavior this core replaces and is kept on purpose; callers wanting a
    /// precise average can derive it from `count` and `total_clicks`.
    pub average_clicks: i64,
}

impl RegistryStats {
    /// The defined aggregate for an empty registry.
    pub fn empty() -> Self {
        Self {
            count: 0,
            total_clicks: 0,
            most_clicked: None,
            average_clicks: 0,
        }
    }

    fn from_snapshot(mappings: &[Mapping]) -> Self {
        if mappings.is_empty() {
            return Self::empty();
        }

        let count = mappings.len() as i64;
        let total_clicks: i64 = mappings.iter().map(|m| m.click_count).sum();

        // Strictly-greater comparison over the creation-order scan keeps the
        // first created among ties.
        let mut most_clicked = &mappings[0];
        for mapping in &mappings[1..] {
            if mapping.click_count > most_clicked.click_count {
                most_clicked = mapping;
            }
        }

        Self {
            count,
            total_clicks,
            most_clicked: Some(most_clicked.code.clone()),
            average_clicks: total_clicks / count,
        }
    }
}

/// Service computing aggregate click statistics from registry snapshots.
pub struct StatsService<R: MappingRepository> {
    repository: Arc<R>,
}

impl<R: MappingRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Computes the aggregate over the current registry contents.
    ///
    /// An empty registry yields the all-zero aggregate with no most-clicked
    /// code rather than a division error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn stats(&self) -> Result<RegistryStats, AppError> {
        let mappings = self.repository.list_all().await?;
        Ok(RegistryStats::from_snapshot(&mappings))
    }

    /// Counts registered mappings without materializing a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count_mappings(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
