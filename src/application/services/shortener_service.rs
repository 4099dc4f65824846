//! Shortening and resolution service.

use std::sync::Arc;

use crate::domain::entities::Mapping;
use crate::domain::repositories::{MappingRepository, ShortenOutcome};
use crate::error::AppError;
use crate::utils::target_validator::validate_target;
use serde_json::json;

/// Service for creating short codes and resolving them back to targets.
///
/// Applies the URL plausibility gate, delegates the atomic find-or-create to
/// the repository, and turns storage misses into [`AppError::NotFound`].
pub struct ShortenerService<R: MappingRepository> {
    repository: Arc<R>,
}

impl<R: MappingRepository> ShortenerService<R> {
    /// Creates a new shortener service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Shortens a target URL, returning the mapping that serves it.
    ///
    /// # Idempotence
    ///
    /// Repeated calls for the same target return the existing mapping; no new
    /// code is allocated and the generator is not consulted.
    ///
    /// Leading and trailing whitespace is trimmed before the target is
    /// stored, so `" https://a.io"` and `"https://a.io"` share one mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the target fails the plausibility
    /// gate, and [`AppError::GenerationExhausted`] if the code keyspace is
    /// under too much pressure to allocate a fresh code.
    pub async fn shorten(&self, target: &str) -> Result<Mapping, AppError> {
        validate_target(target)?;
        let target = target.trim();

        let outcome = self.repository.find_or_create(target).await?;
        match &outcome {
            ShortenOutcome::Created(mapping) => {
                tracing::info!(code = %mapping.code, "short code allocated");
            }
            ShortenOutcome::Existing(mapping) => {
                tracing::debug!(code = %mapping.code, "target already shortened");
            }
        }

        Ok(outcome.into_mapping())
    }

    /// Resolves a short code to its mapping, recording the click.
    ///
    /// The click increment is atomic with the lookup; concurrent resolves of
    /// the same code never lose updates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never issued; nothing
    /// is mutated in that case.
    pub async fn resolve(&self, code: &str) -> Result<Mapping, AppError> {
        self.repository
            .record_click(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short code not found", json!({ "code": code })))
    }

    /// Looks up a mapping by code without recording a click.
    ///
    /// Intended for display layers that show a mapping without following it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never issued.
    pub async fn peek(&self, code: &str) -> Result<Mapping, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short code not found", json!({ "code": code })))
    }

    /// Returns point-in-time snapshots of all mappings in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_mappings(&self) -> Result<Vec<Mapping>, AppError> {
        self.repository.list_all().await
    }
}
