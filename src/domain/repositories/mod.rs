//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for mapping storage; implementations live in
//! [`crate::infrastructure`]. Mock implementations are auto-generated via
//! `mockall` for service unit tests.

pub mod mapping_repository;

pub use mapping_repository::{MappingRepository, ShortenOutcome};

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
