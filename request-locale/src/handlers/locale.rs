use axum::Json;

use crate::models::RequestLocale;

/// Current request's locale decision
pub async fn get_locale(locale: RequestLocale) -> Json<RequestLocale> {
    tracing::debug!("Serving locale decision: effective={}", locale.effective());
    Json(locale)
}

/// Liveness probe
pub async fn health() -> &'static str {
    "ok"
}
