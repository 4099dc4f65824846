//! Infrastructure layer implementing the domain's storage contracts.
//!
//! # Modules
//!
//! - [`memory`] - Process-local, lock-synchronized repository

pub mod memory;
