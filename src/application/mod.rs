//! Application layer services implementing the core's business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls, validation, and logging. Services consume repository traits and
//! provide the narrow contract an embedding presentation layer wraps.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Shorten, resolve, and list mappings
//! - [`services::stats_service::StatsService`] - Aggregate click statistics

pub mod services;
