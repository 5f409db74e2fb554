use async_trait::async_trait;
use dashmap::DashMap;
use signpost_core::error::Result;
use signpost_core::{Catalog, CatalogEntry};
use tracing::trace;

/// An in-memory catalog backend.
///
/// Serves a fixed registry of service instances. Used by the test
/// suites in place of a live Consul agent, and usable for offline
/// setups where the instance list is known ahead of time.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    services: DashMap<String, Vec<CatalogEntry>>,
}

impl StaticCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one instance under `service`. Registration order is
    /// the order queries return entries in.
    pub fn register(&self, service: impl Into<String>, entry: CatalogEntry) {
        self.services.entry(service.into()).or_default().push(entry);
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn service(&self, service: &str, port_type: &str) -> Result<Vec<CatalogEntry>> {
        let entries = self
            .services
            .get(service)
            .map(|entries| entries.clone())
            .unwrap_or_default();

        trace!(service, port_type, options = entries.len(), "static catalog lookup");

        if port_type.is_empty() {
            return Ok(entries);
        }

        Ok(entries
            .into_iter()
            .filter(|entry| entry.tags.iter().any(|tag| tag == port_type))
            .collect())
    }
}
