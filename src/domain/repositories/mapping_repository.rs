//! Repository trait for short code mapping storage.

use crate::domain::entities::Mapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Outcome of an idempotent shorten request at the storage layer.
///
/// Both variants carry a snapshot of the mapping reachable by the requested
/// target after the call; `Created` means this call allocated the code.
#[derive(Debug, Clone)]
pub enum ShortenOutcome {
    Created(Mapping),
    Existing(Mapping),
}

impl ShortenOutcome {
    /// Unwraps the mapping snapshot regardless of how it came to exist.
    pub fn into_mapping(self) -> Mapping {
        match self {
            Self::Created(mapping) | Self::Existing(mapping) => mapping,
        }
    }

    /// Returns true if this call allocated a new code.
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Repository interface for the mapping registry.
///
/// Owns the bidirectional association between short codes and target URLs
/// plus the per-code click counters. Implementations must be safe under
/// concurrent invocation: the check-then-insert sequence of
/// [`find_or_create`] and the counter increment of [`record_click`] are each
/// atomic with respect to all other operations.
///
/// Callers are expected to validate targets before invoking
/// [`find_or_create`]; the repository assumes a non-empty target and does not
/// re-validate.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryMappingRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
///
/// [`find_or_create`]: MappingRepository::find_or_create
/// [`record_click`]: MappingRepository::record_click
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Returns the existing mapping for `target`, or registers a new one with
    /// a freshly allocated code and `click_count = 0`.
    ///
    /// The target check, code allocation, and insertion into both indices
    /// happen in one critical section: of two concurrent calls for the same
    /// unseen target, exactly one creates the mapping and the other observes
    /// it as [`ShortenOutcome::Existing`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::GenerationExhausted`] if no free code could be
    /// allocated within the generator's attempt budget.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_or_create(&self, target: &str) -> Result<ShortenOutcome, AppError>;

    /// Finds a mapping by its short code without recording a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, AppError>;

    /// Finds a mapping by its target URL.
    ///
    /// Used to check whether a URL has already been shortened.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_target(&self, target: &str) -> Result<Option<Mapping>, AppError>;

    /// Atomically increments the click counter for `code` and returns the
    /// updated mapping, or `Ok(None)` if the code is unknown (no side effect).
    ///
    /// Concurrent clicks on the same code never lose updates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn record_click(&self, code: &str) -> Result<Option<Mapping>, AppError>;

    /// Returns point-in-time snapshots of all mappings in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_all(&self) -> Result<Vec<Mapping>, AppError>;

    /// Counts registered mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;
}
