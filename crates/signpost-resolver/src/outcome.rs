use signpost_core::CatalogError;
use url::Url;

use crate::target::TargetError;

/// One entry of a multiple-results listing, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    /// Redirect target for this instance.
    pub url: Url,
    /// Node hostname qualified with the cluster suffix.
    pub full_hostname: String,
    /// The registered service port.
    pub port: u16,
    /// Display form of the entry's tags, e.g. ` (http, v2)`; empty when
    /// the entry has none.
    pub tags_display: String,
}

/// The outcome of resolving one request hostname.
///
/// Produced exactly once per request and consumed exactly once by the
/// presentation layer, which must match exhaustively so new outcome
/// kinds cannot be silently ignored. Errors are carried as values;
/// resolution never panics.
#[derive(Debug)]
pub enum Resolution {
    /// An operator-configured route matched the hostname.
    StaticRedirect { url: Url },
    /// The hostname addressed the Nomad UI shortcut.
    UiRedirect { url: Url },
    /// Exactly one catalog instance matched; redirect straight to it.
    SingleRedirect { url: Url },
    /// Two or more catalog instances matched; list them all.
    MultipleResults {
        service: String,
        /// Plain-text note naming the queried port type, empty when the
        /// address did not pick one.
        port_type_suffix: String,
        entries: Vec<ResolvedEntry>,
    },
    /// The catalog knows no instance for the queried service.
    NoResults {
        service: String,
        port_type_suffix: String,
    },
    /// The hostname is not a service address.
    ParseError { hostname: String },
    /// The catalog could not be queried.
    QueryError {
        hostname: String,
        source: CatalogError,
    },
    /// The redirect target could not be built from the request URL.
    UrlBuildError {
        hostname: String,
        source: TargetError,
    },
}

impl Resolution {
    /// Short outcome tag for diagnostics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Resolution::StaticRedirect { .. } => "static_redirect",
            Resolution::UiRedirect { .. } => "ui_redirect",
            Resolution::SingleRedirect { .. } => "single_redirect",
            Resolution::MultipleResults { .. } => "multiple_results",
            Resolution::NoResults { .. } => "no_results",
            Resolution::ParseError { .. } => "parse_error",
            Resolution::QueryError { .. } => "query_error",
            Resolution::UrlBuildError { .. } => "url_build_error",
        }
    }
}
