//! Process-local mapping repository.
//!
//! The single shared mutable resource of the core: both indices and the
//! creation-order list live behind one `RwLock` and are only ever mutated
//! together, so they cannot diverge. Lookups take the read lock; mutations
//! take the write lock. No I/O happens inside a critical section; code
//! generation is a CPU-only random draw.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::Mapping;
use crate::domain::repositories::{MappingRepository, ShortenOutcome};
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;

#[derive(Debug, Default)]
struct RegistryIndices {
    /// Primary index: code -> mapping.
    by_code: HashMap<String, Mapping>,
    /// Secondary index: target -> code, for idempotent shortening.
    code_by_target: HashMap<String, String>,
    /// Codes in creation order, for `list_all` snapshots.
    creation_order: Vec<String>,
}

impl RegistryIndices {
    fn snapshot_by_code(&self, code: &str) -> Result<Mapping, AppError> {
        self.by_code.get(code).cloned().ok_or_else(|| {
            AppError::internal("Registry indices diverged", json!({ "code": code }))
        })
    }
}

/// In-memory [`MappingRepository`] backed by hash indices.
///
/// State lives for the lifetime of the value and vanishes with it; durability
/// is a storage collaborator's job, not this crate's.
pub struct InMemoryMappingRepository {
    generator: CodeGenerator,
    indices: RwLock<RegistryIndices>,
}

impl InMemoryMappingRepository {
    /// Creates an empty repository allocating codes with `generator`.
    pub fn new(generator: CodeGenerator) -> Self {
        Self {
            generator,
            indices: RwLock::new(RegistryIndices::default()),
        }
    }
}

impl Default for InMemoryMappingRepository {
    fn default() -> Self {
        Self::new(CodeGenerator::default())
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn find_or_create(&self, target: &str) -> Result<ShortenOutcome, AppError> {
        let mut indices = self.indices.write().await;

        if let Some(code) = indices.code_by_target.get(target) {
            let existing = indices.snapshot_by_code(code)?;
            return Ok(ShortenOutcome::Existing(existing));
        }

        // The uniqueness check runs against the live code index inside the
        // same critical section as the insert, so no other writer can claim
        // the code in between.
        let code = self
            .generator
            .generate(|candidate| indices.by_code.contains_key(candidate))?;

        let mapping = Mapping::new(code.clone(), target.to_string(), 0, Utc::now());
        indices.by_code.insert(code.clone(), mapping.clone());
        indices
            .code_by_target
            .insert(target.to_string(), code.clone());
        indices.creation_order.push(code);

        debug!(code = %mapping.code, "registered new mapping");

        Ok(ShortenOutcome::Created(mapping))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, AppError> {
        let indices = self.indices.read().await;
        Ok(indices.by_code.get(code).cloned())
    }

    async fn find_by_target(&self, target: &str) -> Result<Option<Mapping>, AppError> {
        let indices = self.indices.read().await;
        match indices.code_by_target.get(target) {
            Some(code) => indices.snapshot_by_code(code).map(Some),
            None => Ok(None),
        }
    }

    async fn record_click(&self, code: &str) -> Result<Option<Mapping>, AppError> {
        let mut indices = self.indices.write().await;
        match indices.by_code.get_mut(code) {
            Some(mapping) => {
                mapping.click_count += 1;
                Ok(Some(mapping.clone()))
            }
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<Mapping>, AppError> {
        let indices = self.indices.read().await;
        indices
            .creation_order
            .iter()
            .map(|code| indices.snapshot_by_code(code))
            .collect()
    }

    async fn count(&self) -> Result<i64, AppError> {
        let indices = self.indices.read().await;
        Ok(indices.creation_order.len() as i64)
    }
}
