use axum::http::{header, HeaderMap, Uri};
use tracing::debug;

/// Answers load-balancer health checks before any resolution runs.
pub async fn health_handler(headers: HeaderMap, uri: Uri) -> &'static str {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    debug!(host, path = %uri.path(), "responded to health check");

    "ok"
}

/// Reserved for metric export; responds with an empty body for now.
pub async fn metrics_handler() {}
