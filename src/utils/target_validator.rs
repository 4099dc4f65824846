//! Plausibility gate for target URLs.
//!
//! Applied by the service layer before anything reaches the registry; the
//! registry itself assumes a validated, non-empty target. The gate is
//! deliberately permissive: it filters obvious junk (empty input, embedded
//! whitespace, no domain marker) without attempting full URL canonicalization.

use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Shortest input accepted as a plausible URL (e.g. `a.io`).
const MIN_TARGET_LENGTH: usize = 4;

/// Validates a target URL before shortening.
///
/// # Rules
///
/// - Non-empty after trimming, at least 4 characters
/// - No embedded whitespace or control characters
/// - One of:
///   - parses as an absolute `http` / `https` URL
///   - starts with `www.`
///   - contains a `.` domain separator
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_target("https://example.com/page").is_ok());
/// assert!(validate_target("www.example.com").is_ok());
/// assert!(validate_target("example.com").is_ok());
///
/// assert!(validate_target("").is_err());
/// assert!(validate_target("abc").is_err());          // Too short
/// assert!(validate_target("not a url").is_err());    // Whitespace
/// assert!(validate_target("localhost").is_err());    // No domain marker
/// ```
pub fn validate_target(target: &str) -> Result<(), AppError> {
    let trimmed = target.trim();

    if trimmed.is_empty() {
        return Err(AppError::bad_request(
            "Target URL must not be empty",
            json!({}),
        ));
    }

    if trimmed.len() < MIN_TARGET_LENGTH {
        return Err(AppError::bad_request(
            "Target URL is too short",
            json!({ "provided_length": trimmed.len(), "minimum": MIN_TARGET_LENGTH }),
        ));
    }

    if trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(AppError::bad_request(
            "Target URL must not contain whitespace or control characters",
            json!({ "target": trimmed }),
        ));
    }

    if is_plausible_url(trimmed) {
        Ok(())
    } else {
        Err(AppError::bad_request(
            "Target does not look like a URL",
            json!({ "target": trimmed }),
        ))
    }
}

/// Accepts absolute http(s) URLs, `www.`-prefixed hosts, and bare domains.
fn is_plausible_url(target: &str) -> bool {
    if let Ok(url) = Url::parse(target) {
        return matches!(url.scheme(), "http" | "https");
    }

    target.starts_with("www.") || target.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_https_url() {
        assert!(validate_target("https://example.com/page").is_ok());
    }

    #[test]
    fn test_validate_http_url() {
        assert!(validate_target("http://example.com").is_ok());
    }

    #[test]
    fn test_validate_www_prefix() {
        assert!(validate_target("www.example.com").is_ok());
    }

    #[test]
    fn test_validate_bare_domain() {
        assert!(validate_target("example.com").is_ok());
    }

    #[test]
    fn test_validate_url_with_query() {
        assert!(validate_target("https://example.com/search?q=rust&lang=en").is_ok());
    }

    #[test]
    fn test_reject_empty() {
        let result = validate_target("");
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[test]
    fn test_reject_whitespace_only() {
        assert!(validate_target("   ").is_err());
    }

    #[test]
    fn test_reject_too_short() {
        let result = validate_target("a.b");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too short"));
    }

    #[test]
    fn test_reject_embedded_whitespace() {
        assert!(validate_target("https://example.com/a page").is_err());
        assert!(validate_target("not a url").is_err());
    }

    #[test]
    fn test_reject_no_domain_marker() {
        assert!(validate_target("localhost").is_err());
        assert!(validate_target("just-text").is_err());
    }

    #[test]
    fn test_reject_dangerous_schemes() {
        // These parse as URLs with non-http schemes, which the gate
        // rejects outright.
        assert!(validate_target("javascript:alert(1)").is_err());
        assert!(validate_target("file:///etc/passwd").is_err());
    }

    #[test]
    fn test_leading_trailing_whitespace_is_trimmed() {
        assert!(validate_target("  https://example.com  ").is_ok());
    }
}
