mod common;

use common::{build_shortener, resolve_n};
use shortmap::AppError;

#[tokio::test]
async fn resolve_counts_each_click() {
    let shortener = build_shortener();
    let mapping = shortener.shorten("https://example.com/page").await.unwrap();

    let first = shortener.resolve(&mapping.code).await.unwrap();
    assert_eq!(first.click_count, 1);

    let second = shortener.resolve(&mapping.code).await.unwrap();
    assert_eq!(second.click_count, 2);
}

#[tokio::test]
async fn resolve_n_times_yields_click_count_n() {
    let shortener = build_shortener();
    let mapping = shortener.shorten("https://example.com/page").await.unwrap();

    resolve_n(&shortener, &mapping.code, 25).await;

    let peeked = shortener.peek(&mapping.code).await.unwrap();
    assert_eq!(peeked.click_count, 25);
}

#[tokio::test]
async fn resolve_unknown_code_is_not_found() {
    let shortener = build_shortener();

    let result = shortener.resolve("art-zzzzzz").await;
    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[tokio::test]
async fn resolve_miss_leaves_state_untouched() {
    let shortener = build_shortener();
    let mapping = shortener.shorten("https://example.com/page").await.unwrap();

    let _ = shortener.resolve("art-zzzzzz").await;

    let mappings = shortener.list_mappings().await.unwrap();
    assert_eq!(mappings.len(), 1);
    assert_eq!(mappings[0].click_count, 0);
    assert_eq!(mappings[0].code, mapping.code);
}

#[tokio::test]
async fn peek_does_not_count_a_click() {
    let shortener = build_shortener();
    let mapping = shortener.shorten("https://example.com/page").await.unwrap();

    shortener.peek(&mapping.code).await.unwrap();
    shortener.peek(&mapping.code).await.unwrap();

    let peeked = shortener.peek(&mapping.code).await.unwrap();
    assert_eq!(peeked.click_count, 0);
}

#[tokio::test]
async fn resolve_only_touches_its_own_mapping() {
    let shortener = build_shortener();
    let visited = shortener.shorten("https://example.com/a").await.unwrap();
    let untouched = shortener.shorten("https://example.com/b").await.unwrap();

    resolve_n(&shortener, &visited.code, 3).await;

    assert_eq!(shortener.peek(&visited.code).await.unwrap().click_count, 3);
    assert_eq!(shortener.peek(&untouched.code).await.unwrap().click_count, 0);
}
