//! Domain layer containing the registry's entities and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure concerns
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
