//! Locale resolution middleware
//!
//! Resolves the locale of every request, stores the decision in the request
//! extensions for handlers to access and persists newly negotiated locales
//! in the `accept-language` cookie.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{
        HeaderMap, StatusCode,
        header::{ACCEPT_LANGUAGE, COOKIE, SET_COOKIE},
        request::Parts,
    },
    middleware::Next,
    response::Response,
};

use crate::models::RequestLocale;
use crate::services::{LOCALE_COOKIE, LocaleResolver, Resolution};
use crate::utils::{LocaleError, set_cookie_header};

/// Middleware to resolve the request locale
///
/// Never rejects a request: when resolution fails the default applies and
/// the next handler still runs.
pub async fn locale_middleware(
    State(resolver): State<LocaleResolver>,
    mut req: Request,
    next: Next,
) -> Response {
    let accept_language = req
        .headers()
        .get(ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let cookie_header = joined_cookie_header(req.headers());

    let task_resolver = resolver.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        task_resolver.resolve(accept_language.as_deref(), cookie_header.as_deref())
    })
    .await
    .map_err(|err| LocaleError::ResolutionAborted(err.to_string()))
    .and_then(|result| result);

    let resolution = match outcome {
        Ok(resolution) => resolution,
        Err(err) => {
            tracing::error!("Locale resolution failed for {} {}: {}", req.method(), req.uri(), err);
            Resolution { locale: resolver.fallback(), set_cookie: None }
        },
    };

    req.extensions_mut().insert(resolution.locale);

    let mut response = next.run(req).await;

    if let Some(locale) = resolution.set_cookie
        && let Some(value) = set_cookie_header(LOCALE_COOKIE, &locale)
    {
        response.headers_mut().append(SET_COOKIE, value);
    }

    response
}

/// All `Cookie` header lines joined the way HTTP/1.1 would send them
fn joined_cookie_header(headers: &HeaderMap) -> Option<String> {
    let lines: Vec<&str> = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();

    if lines.is_empty() { None } else { Some(lines.join("; ")) }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestLocale
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestLocale>()
            .cloned()
            .ok_or((StatusCode::INTERNAL_SERVER_ERROR, "Locale middleware is not installed"))
    }
}
