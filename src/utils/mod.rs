//! Utility modules for code generation and target validation.
//!
//! - [`code_generator`] - Short code generation with bounded collision retry
//! - [`target_validator`] - URL plausibility gate applied before shortening

pub mod code_generator;
pub mod target_validator;
