//! Short code generation.
//!
//! Codes are a fixed literal prefix followed by a random suffix drawn from
//! the 62-symbol alphanumeric alphabet. At the default suffix length of 6
//! that is 62^6 (~5.7e10) possible suffixes per prefix, so collisions are
//! astronomically unlikely but not impossible; uniqueness is always enforced
//! against the registry's code index, never assumed.

use crate::error::AppError;
use rand::{Rng, distr::Alphanumeric};
use serde_json::json;

/// Default literal prefix prepended to every generated code.
pub const DEFAULT_CODE_PREFIX: &str = "art-";

/// Default length of the random alphanumeric suffix.
pub const DEFAULT_SUFFIX_LENGTH: usize = 6;

/// Default bound on collision retries before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 32;

/// Generates short codes with a bounded uniqueness-retry loop.
///
/// The generator is stateless apart from its configuration and is reentrant;
/// it never reserves or registers codes. Reservation is the registry's job,
/// which calls [`generate`] with a read-only membership check over its code
/// index inside its own critical section.
///
/// [`generate`]: CodeGenerator::generate
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    prefix: String,
    suffix_length: usize,
    max_attempts: usize,
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_PREFIX, DEFAULT_SUFFIX_LENGTH, DEFAULT_MAX_ATTEMPTS)
    }
}

impl CodeGenerator {
    /// Creates a generator with the given prefix, suffix length, and retry bound.
    pub fn new(prefix: impl Into<String>, suffix_length: usize, max_attempts: usize) -> Self {
        Self {
            prefix: prefix.into(),
            suffix_length,
            max_attempts,
        }
    }

    /// Total length of codes this generator produces.
    pub fn code_length(&self) -> usize {
        self.prefix.len() + self.suffix_length
    }

    /// Draws one random candidate code without checking uniqueness.
    pub fn candidate(&self) -> String {
        let mut code = String::with_capacity(self.code_length());
        code.push_str(&self.prefix);
        code.extend(
            rand::rng()
                .sample_iter(Alphanumeric)
                .take(self.suffix_length)
                .map(char::from),
        );
        code
    }

    /// Produces a code for which `is_taken` returns false.
    ///
    /// Retries internally with fresh random draws, at most `max_attempts`
    /// times. Generation has no side effects: the caller owns the window
    /// between this check and the actual insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::GenerationExhausted`] when every attempt collided,
    /// which signals keyspace pressure rather than a transient fault.
    pub fn generate<F>(&self, mut is_taken: F) -> Result<String, AppError>
    where
        F: FnMut(&str) -> bool,
    {
        for attempt in 1..=self.max_attempts {
            let code = self.candidate();

            if !is_taken(&code) {
                return Ok(code);
            }

            tracing::warn!(attempt, code = %code, "code collision, retrying");
        }

        Err(AppError::generation_exhausted(
            "Failed to generate a unique code",
            json!({
                "attempts": self.max_attempts,
                "suffix_length": self.suffix_length,
            }),
        ))
    }
}
