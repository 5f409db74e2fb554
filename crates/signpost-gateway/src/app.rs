use axum::routing::get;
use axum::Router;
use signpost_core::Catalog;
use tower_http::trace::TraceLayer;

use crate::handlers::{health_handler, metrics_handler, resolve_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router<C: Catalog>(state: AppState<C>) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/healthy", get(health_handler))
            .route("/healthz", get(health_handler))
            .route("/metrics", get(metrics_handler))
            .fallback(resolve_handler::<C>)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
