//! Request locale resolution for axum services
//!
//! Decides, per request, which locale applies based on the `accept-language`
//! cookie, the `Accept-Language` header and a configured default, checked
//! against the locale directories present on disk.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

#[cfg(test)]
mod tests;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

pub use config::{Config, LocaleConfig};
pub use models::{LocaleProperty, RequestLocale};
pub use services::{LocaleResolver, LocaleSettings, Resolution};
pub use utils::{LocaleError, LocaleResult};

/// Build the application router with locale resolution on every route
pub fn app(resolver: LocaleResolver) -> Router {
    Router::new()
        .route("/", get(handlers::get_locale))
        .route("/api/locale", get(handlers::get_locale))
        .route("/health", get(handlers::health))
        .layer(axum::middleware::from_fn_with_state(resolver, middleware::locale_middleware))
        .layer(TraceLayer::new_for_http())
}
