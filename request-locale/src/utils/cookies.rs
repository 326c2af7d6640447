//! Cookie helpers
//!
//! Reads a single named cookie out of a raw `Cookie` header and renders the
//! matching `Set-Cookie` value. Only what locale resolution needs; no
//! attribute handling.

use std::borrow::Cow;

use axum::http::HeaderValue;
use regex::Regex;

use super::error::{LocaleError, LocaleResult};

/// Extracts the value of one cookie from raw `Cookie` header strings.
///
/// Name matching is case-insensitive and the first occurrence wins.
#[derive(Debug, Clone)]
pub struct CookieExtractor {
    name: String,
    pattern: Regex,
}

impl CookieExtractor {
    pub fn new(name: &str) -> LocaleResult<Self> {
        let source = format!(r"(?i)(?:^|;)\s?{}=(.*?)(?:;|$)", regex::escape(name));
        let pattern = Regex::new(&source).map_err(|source| LocaleError::InvalidCookieName {
            name: name.to_string(),
            source,
        })?;

        Ok(Self { name: name.to_string(), pattern })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the percent-decoded cookie value, or `None` if the cookie is not present.
    pub fn extract(&self, raw: &str) -> Option<String> {
        let captures = self.pattern.captures(raw)?;
        let value = captures.get(1)?.as_str();

        Some(decode_value(value).into_owned())
    }
}

/// One-off extraction; prefer a cached [`CookieExtractor`] on hot paths.
pub fn extract_cookie(name: &str, raw: &str) -> Option<String> {
    match CookieExtractor::new(name) {
        Ok(extractor) => extractor.extract(raw),
        Err(err) => {
            tracing::warn!("Cannot extract cookie: {}", err);
            None
        },
    }
}

/// Render a `Set-Cookie` header value with no attributes (session lifetime).
pub fn set_cookie_header(name: &str, value: &str) -> Option<HeaderValue> {
    let cookie = format!("{}={}", name, urlencoding::encode(value));
    HeaderValue::from_str(&cookie).ok()
}

// Values that do not decode to UTF-8 are passed through untouched
fn decode_value(value: &str) -> Cow<'_, str> {
    urlencoding::decode(value).unwrap_or(Cow::Borrowed(value))
}
