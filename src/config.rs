//! Core configuration loaded from environment variables.
//!
//! Configuration is loaded once by the embedding process and validated before
//! any registry is constructed.
//!
//! ## Optional Variables
//!
//! - `CODE_PREFIX` - Literal prefix for generated codes (default: `art-`)
//! - `CODE_SUFFIX_LENGTH` - Random suffix length (default: 6)
//! - `CODE_MAX_ATTEMPTS` - Collision retry bound (default: 32)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

use crate::utils::code_generator::{
    CodeGenerator, DEFAULT_CODE_PREFIX, DEFAULT_MAX_ATTEMPTS, DEFAULT_SUFFIX_LENGTH,
};

/// Core configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Literal prefix prepended to every generated code.
    pub code_prefix: String,
    /// Length of the random alphanumeric suffix. At length 6 the keyspace is
    /// 62^6 suffixes per prefix.
    pub code_suffix_length: usize,
    /// Upper bound on collision retries before `shorten` fails with a
    /// generation-exhausted error.
    pub code_max_attempts: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            code_prefix: DEFAULT_CODE_PREFIX.to_string(),
            code_suffix_length: DEFAULT_SUFFIX_LENGTH,
            code_max_attempts: DEFAULT_MAX_ATTEMPTS,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset variables fall back to defaults; values that fail to parse are
    /// treated as unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let code_prefix = env::var("CODE_PREFIX").unwrap_or(defaults.code_prefix);

        let code_suffix_length = env::var("CODE_SUFFIX_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.code_suffix_length);

        let code_max_attempts = env::var("CODE_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.code_max_attempts);

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Self {
            code_prefix,
            code_suffix_length,
            code_max_attempts,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `code_suffix_length` is 0 or larger than 32
    /// - `code_max_attempts` is 0 or larger than 10000
    /// - `code_prefix` is longer than 16 characters or contains whitespace
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.code_suffix_length == 0 || self.code_suffix_length > 32 {
            anyhow::bail!(
                "CODE_SUFFIX_LENGTH must be between 1 and 32, got {}",
                self.code_suffix_length
            );
        }

        if self.code_max_attempts == 0 || self.code_max_attempts > 10_000 {
            anyhow::bail!(
                "CODE_MAX_ATTEMPTS must be between 1 and 10000, got {}",
                self.code_max_attempts
            );
        }

        if self.code_prefix.len() > 16 {
            anyhow::bail!(
                "CODE_PREFIX is too long (max: 16), got {} characters",
                self.code_prefix.len()
            );
        }

        if self.code_prefix.chars().any(|c| c.is_whitespace()) {
            anyhow::bail!("CODE_PREFIX must not contain whitespace");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Builds a code generator from this configuration.
    pub fn code_generator(&self) -> CodeGenerator {
        CodeGenerator::new(
            self.code_prefix.clone(),
            self.code_suffix_length,
            self.code_max_attempts,
        )
    }

    /// Prints a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Code prefix: '{}'", self.code_prefix);
        tracing::info!("  Code suffix length: {}", self.code_suffix_length);
        tracing::info!("  Generation retry bound: {}", self.code_max_attempts);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
