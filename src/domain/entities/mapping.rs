//! Mapping entity representing a short code to target URL association.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A registered short code and its target URL.
///
/// `code` and `target` are immutable once created; `click_count` is the only
/// mutable field and grows monotonically, driven exclusively by successful
/// resolutions of this mapping's own code. Values handed out by the registry
/// are point-in-time snapshots, not live references into registry state.
#[derive(Debug, Clone, Serialize)]
pub struct Mapping {
    pub code: String,
    pub target: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(code: String, target: String, click_count: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            target,
            click_count,
            created_at,
        }
    }

    /// Returns true if the mapping has never been resolved.
    pub fn is_unvisited(&self) -> bool {
        self.click_count == 0
    }
}
