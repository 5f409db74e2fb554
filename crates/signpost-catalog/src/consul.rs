use async_trait::async_trait;
use serde::Deserialize;
use signpost_core::error::{CatalogError, Result};
use signpost_core::{Catalog, CatalogEntry};
use tracing::{debug, trace};
use url::Url;

/// Consul implementation of the catalog contract.
///
/// Queries the agent's HTTP catalog API
/// (`GET /v1/catalog/service/<name>?tag=<port_type>`). Results are
/// fetched fresh on every call; there is no caching and no retry, and
/// dropping the call future abandons the in-flight request.
#[derive(Debug, Clone)]
pub struct ConsulCatalog {
    http: reqwest::Client,
    base: Url,
}

impl ConsulCatalog {
    /// Creates a catalog client for the agent at `addr`,
    /// e.g. `http://127.0.0.1:8500`.
    pub fn new(addr: &str) -> Result<Self> {
        let base = Url::parse(addr).map_err(|e| {
            CatalogError::InvalidData(format!("invalid consul address '{addr}': {e}"))
        })?;
        Ok(Self::with_client(reqwest::Client::new(), base))
    }

    /// Creates a catalog client from an existing HTTP client.
    pub fn with_client(http: reqwest::Client, base: Url) -> Self {
        Self { http, base }
    }

    fn service_url(&self, service: &str, port_type: &str) -> Result<Url> {
        let mut url = self
            .base
            .join(&format!("v1/catalog/service/{service}"))
            .map_err(|e| {
                CatalogError::InvalidData(format!("invalid service name '{service}': {e}"))
            })?;

        if !port_type.is_empty() {
            url.query_pairs_mut().append_pair("tag", port_type);
        }

        Ok(url)
    }
}

/// One record of the catalog API response. Consul returns many more
/// fields per registration; only the ones the redirector consumes are
/// kept.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ServiceRecord {
    node: String,
    // null for registrations without tags
    #[serde(default)]
    service_tags: Option<Vec<String>>,
    service_port: u16,
}

impl From<ServiceRecord> for CatalogEntry {
    fn from(record: ServiceRecord) -> Self {
        CatalogEntry {
            hostname: record.node,
            tags: record.service_tags.unwrap_or_default(),
            port: record.service_port,
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> CatalogError {
    let message = err.to_string();

    if err.is_timeout() {
        CatalogError::Timeout(message)
    } else if err.is_connect() {
        CatalogError::Unavailable(message)
    } else if err.is_decode() {
        CatalogError::InvalidData(message)
    } else {
        CatalogError::Query(message)
    }
}

#[async_trait]
impl Catalog for ConsulCatalog {
    async fn service(&self, service: &str, port_type: &str) -> Result<Vec<CatalogEntry>> {
        let url = self.service_url(service, port_type)?;
        trace!(service, port_type, url = %url, "querying consul catalog");

        let records: Vec<ServiceRecord> = self
            .http
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?
            .error_for_status()
            .map_err(map_reqwest_error)?
            .json()
            .await
            .map_err(map_reqwest_error)?;

        debug!(service, options = records.len(), "consul catalog responded");
        Ok(records.into_iter().map(CatalogEntry::from).collect())
    }
}
