#![allow(dead_code)]

use std::sync::Arc;

use shortmap::prelude::*;

/// Builds the full service stack over a fresh in-memory registry.
pub fn build_services() -> (
    ShortenerService<InMemoryMappingRepository>,
    StatsService<InMemoryMappingRepository>,
) {
    let repository = Arc::new(InMemoryMappingRepository::default());
    (
        ShortenerService::new(Arc::clone(&repository)),
        StatsService::new(repository),
    )
}

/// Builds a shortener over a fresh in-memory registry.
pub fn build_shortener() -> ShortenerService<InMemoryMappingRepository> {
    ShortenerService::new(Arc::new(InMemoryMappingRepository::default()))
}

/// Builds a shortener whose generator is constrained enough to exhaust.
pub fn build_exhaustible_shortener() -> ShortenerService<InMemoryMappingRepository> {
    let generator = CodeGenerator::new("art-", 0, 4);
    ShortenerService::new(Arc::new(InMemoryMappingRepository::new(generator)))
}

/// Resolves `code` `n` times, asserting every resolution succeeds.
pub async fn resolve_n(
    shortener: &ShortenerService<InMemoryMappingRepository>,
    code: &str,
    n: usize,
) {
    for _ in 0..n {
        shortener.resolve(code).await.unwrap();
    }
}
