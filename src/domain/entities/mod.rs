//! Core domain entities representing the registry's data model.
//!
//! Entities are plain data structures without business logic. The registry
//! hands out owned snapshots; no caller ever holds a reference into registry
//! state.

pub mod mapping;

pub use mapping::Mapping;
