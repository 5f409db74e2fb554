use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use signpost_core::Catalog;
use signpost_resolver::Resolution;
use tracing::{debug, warn};
use url::Url;

use crate::render;
use crate::state::AppState;

/// Catch-all handler: anything that is not a health or metrics
/// endpoint resolves the request hostname into a redirect or a page.
pub async fn resolve_handler<C: Catalog>(
    State(state): State<AppState<C>>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let hostname = host.split(':').next().unwrap_or_default().to_string();

    debug!(host, path = %uri, "request");

    // Server-side request URIs are relative; anchor one absolute URL
    // for the target builder to carry path and query from.
    let original_url = match Url::parse(&format!("http://{host}{uri}")) {
        Ok(url) => url,
        Err(e) => {
            warn!(host, error = %e, "request url could not be reconstructed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render::url_build_error(&hostname, &e.to_string())),
            )
                .into_response();
        }
    };

    let outcome = state.resolver().resolve(&hostname, &original_url).await;
    respond(&state, &hostname, outcome)
}

/// Turns an outcome into a response. The match is exhaustive on
/// purpose: a new outcome kind must pick its rendering here.
fn respond<C: Catalog>(state: &AppState<C>, hostname: &str, outcome: Resolution) -> Response {
    match outcome {
        Resolution::StaticRedirect { url }
        | Resolution::UiRedirect { url }
        | Resolution::SingleRedirect { url } => Redirect::temporary(url.as_str()).into_response(),

        Resolution::MultipleResults {
            service,
            port_type_suffix,
            entries,
        } => {
            let mut body = render::results_list(&service, &port_type_suffix, &entries);
            body.push_str(&render::quick_links(state.links(), hostname));
            Html(body).into_response()
        }

        Resolution::NoResults {
            service,
            port_type_suffix,
        } => {
            let mut body = render::no_results(&service, &port_type_suffix);
            body.push_str(render::HOSTNAME_TIPS);
            body.push_str(&render::quick_links(state.links(), hostname));
            (StatusCode::NOT_FOUND, Html(body)).into_response()
        }

        Resolution::ParseError { hostname: failed } => {
            let mut body = render::parse_error(&failed);
            body.push_str(render::HOSTNAME_TIPS);
            body.push_str(&render::quick_links(state.links(), hostname));
            Html(body).into_response()
        }

        Resolution::QueryError {
            hostname: failed,
            source,
        } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(render::query_error(&failed, &source.to_string())),
        )
            .into_response(),

        Resolution::UrlBuildError {
            hostname: failed,
            source,
        } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(render::url_build_error(&failed, &source.to_string())),
        )
            .into_response(),
    }
}
