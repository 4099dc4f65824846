//! # shortmap
//!
//! An embeddable, concurrency-safe URL shortening core: collision-free
//! short-code allocation, bidirectional code/target resolution with click
//! accounting, and aggregate statistics.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the repository trait
//! - **Application Layer** ([`application`]) - Validation gate and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory repository implementation
//!
//! There is deliberately no transport or persistence layer: the crate exposes
//! a narrow service contract (`shorten`, `resolve`, `list`, `stats`) intended
//! to be wrapped by an external presentation layer, with durability left to a
//! storage collaborator.
//!
//! ## Guarantees
//!
//! - **Idempotent shortening**: one mapping per target, ever; repeated
//!   shortening returns the existing code without consulting the generator.
//! - **Atomic creation**: concurrent `shorten` calls for the same unseen
//!   target produce exactly one mapping, and both callers get its code.
//! - **Lossless click accounting**: `resolve` increments atomically;
//!   concurrent resolves never lose updates. A missed lookup mutates nothing.
//! - **Bounded generation**: the collision retry loop is capped and fails
//!   with an explicit exhaustion error instead of spinning.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use shortmap::prelude::*;
//!
//! let config = shortmap::config::load_from_env()?;
//! let repository = Arc::new(InMemoryMappingRepository::new(config.code_generator()));
//! let shortener = ShortenerService::new(Arc::clone(&repository));
//! let stats = StatsService::new(repository);
//!
//! let mapping = shortener.shorten("https://example.com/page").await?;
//! let resolved = shortener.resolve(&mapping.code).await?;
//! assert_eq!(resolved.target, "https://example.com/page");
//! ```
//!
//! ## Configuration
//!
//! Code format and logging are configured from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub mod config;
pub mod telemetry;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{RegistryStats, ShortenerService, StatsService};
    pub use crate::domain::entities::Mapping;
    pub use crate::domain::repositories::{MappingRepository, ShortenOutcome};
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::InMemoryMappingRepository;
    pub use crate::utils::code_generator::CodeGenerator;
}
