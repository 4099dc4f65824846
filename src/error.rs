//! Library error type shared by all registry operations.
//!
//! Errors are ordinary result values; none of them is fatal to the embedding
//! process. Presentation (HTTP status codes, console formatting) is the
//! caller's concern.

use serde_json::Value;

/// Errors produced by the shortening core.
///
/// Every variant carries a human-readable `message` plus machine-readable
/// `details` for the embedding layer to forward or log.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The target URL failed the plausibility gate before reaching the registry.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// No mapping exists for the requested short code.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Uniqueness violation reported by a storage backend at insert time.
    ///
    /// The in-memory repository resolves collisions inside its critical
    /// section and never returns this; it exists for backends that surface
    /// unique-constraint violations instead.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// The bounded code-generation retry limit was reached without finding a
    /// free code. Signals keyspace pressure; recoverable by widening the
    /// suffix length.
    #[error("{message}")]
    GenerationExhausted { message: String, details: Value },

    /// Storage backend failure. The in-memory repository never returns this;
    /// it exists for alternative [`MappingRepository`] implementations.
    ///
    /// [`MappingRepository`]: crate::domain::repositories::MappingRepository
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn generation_exhausted(message: impl Into<String>, details: Value) -> Self {
        Self::GenerationExhausted {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}
