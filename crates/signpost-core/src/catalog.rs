use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A service instance registered in the catalog: one node+port pair
/// that a request can be redirected to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// The node hostname, without the cluster suffix.
    pub hostname: String,
    /// Free-text tags attached to the registration, in catalog order.
    pub tags: Vec<String>,
    /// The registered service port.
    pub port: u16,
}

impl CatalogEntry {
    /// Guesses the redirect scheme from the entry's tags.
    ///
    /// Tags are scanned case-insensitively in catalog order and the
    /// first `http` or `https` tag wins; entries with neither default
    /// to `http`.
    pub fn guess_scheme(&self) -> &'static str {
        for tag in &self.tags {
            match tag.to_lowercase().as_str() {
                "http" => return "http",
                "https" => return "https",
                _ => {}
            }
        }
        "http"
    }
}

/// A read-only view of a service-discovery catalog.
///
/// This is the one external dependency the resolver consumes. Keeping
/// it a narrow trait lets the real discovery backend be swapped or
/// mocked in tests without network access. Implementations must not
/// cache or retry; a failed query surfaces immediately, and a dropped
/// call future abandons the in-flight query.
#[async_trait]
pub trait Catalog: Send + Sync + 'static {
    /// Returns every registered instance of `service`, optionally
    /// narrowed to registrations tagged with `port_type` (empty means
    /// no tag filter).
    async fn service(&self, service: &str, port_type: &str) -> Result<Vec<CatalogEntry>>;
}
