mod common;

use common::{build_exhaustible_shortener, build_shortener};
use shortmap::AppError;

#[tokio::test]
async fn shorten_returns_code_in_expected_format() {
    let shortener = build_shortener();

    let mapping = shortener.shorten("https://example.com/page").await.unwrap();

    assert!(mapping.code.starts_with("art-"));
    assert_eq!(mapping.code.len(), 10);
    assert!(
        mapping.code["art-".len()..]
            .chars()
            .all(|c| c.is_ascii_alphanumeric())
    );
    assert_eq!(mapping.target, "https://example.com/page");
    assert_eq!(mapping.click_count, 0);
}

#[tokio::test]
async fn shorten_is_idempotent() {
    let shortener = build_shortener();

    let first = shortener.shorten("https://example.com/page").await.unwrap();
    let second = shortener.shorten("https://example.com/page").await.unwrap();

    assert_eq!(first.code, second.code);
    assert_eq!(shortener.list_mappings().await.unwrap().len(), 1);
}

#[tokio::test]
async fn shorten_distinct_targets_get_distinct_codes() {
    let shortener = build_shortener();

    let first = shortener.shorten("https://example.com/a").await.unwrap();
    let second = shortener.shorten("https://example.com/b").await.unwrap();

    assert_ne!(first.code, second.code);
    assert_eq!(shortener.list_mappings().await.unwrap().len(), 2);
}

#[tokio::test]
async fn shorten_then_resolve_round_trips_target() {
    let shortener = build_shortener();

    let mapping = shortener.shorten("https://example.com/page").await.unwrap();
    let resolved = shortener.resolve(&mapping.code).await.unwrap();

    assert_eq!(resolved.target, "https://example.com/page");
}

#[tokio::test]
async fn shorten_accepts_plausible_url_shapes() {
    let shortener = build_shortener();

    for target in [
        "https://example.com",
        "http://example.com/path?q=1",
        "www.example.com",
        "example.com",
    ] {
        assert!(shortener.shorten(target).await.is_ok(), "rejected {target}");
    }
}

#[tokio::test]
async fn shorten_rejects_invalid_targets() {
    let shortener = build_shortener();

    for target in ["", "   ", "a.b", "not a url", "localhost", "plaintext"] {
        let result = shortener.shorten(target).await;
        assert!(
            matches!(result, Err(AppError::Validation { .. })),
            "accepted {target:?}"
        );
    }

    assert!(shortener.list_mappings().await.unwrap().is_empty());
}

#[tokio::test]
async fn shorten_trims_surrounding_whitespace() {
    let shortener = build_shortener();

    let first = shortener.shorten("https://example.com").await.unwrap();
    let second = shortener.shorten("  https://example.com ").await.unwrap();

    assert_eq!(first.code, second.code);
}

#[tokio::test]
async fn shorten_fails_with_exhaustion_when_keyspace_is_saturated() {
    // Zero-length suffix leaves exactly one possible code.
    let shortener = build_exhaustible_shortener();

    shortener.shorten("https://first.example.com").await.unwrap();
    let result = shortener.shorten("https://second.example.com").await;

    assert!(matches!(result, Err(AppError::GenerationExhausted { .. })));
    assert_eq!(shortener.list_mappings().await.unwrap().len(), 1);
}
