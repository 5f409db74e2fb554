use std::sync::Arc;

use signpost_core::{Catalog, CatalogEntry, ServiceAddress};
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ResolverConfig;
use crate::order::order_entries;
use crate::outcome::{Resolution, ResolvedEntry};
use crate::routes::RouteTable;
use crate::target::{build_with_port, qualify_hostname};

/// Port the Nomad UI serves on.
pub const NOMAD_UI_PORT: u16 = 4646;

/// Resolves request hostnames into redirect outcomes.
///
/// Consults the operator route table first (exact match, then with the
/// cluster suffix stripped), then the Nomad UI shortcut, then the
/// service catalog. The resolver holds no per-request state; one
/// instance is shared across all connections, and only the catalog
/// query awaits external I/O.
#[derive(Debug, Clone)]
pub struct Resolver<C> {
    catalog: Arc<C>,
    routes: RouteTable,
    config: ResolverConfig,
}

impl<C: Catalog> Resolver<C> {
    /// Creates a resolver over the given catalog backend.
    pub fn new(config: ResolverConfig, routes: RouteTable, catalog: C) -> Self {
        Self {
            catalog: Arc::new(catalog),
            routes,
            config,
        }
    }

    /// Resolves a request hostname (already stripped of any `:port`)
    /// and the original request URL into a single outcome.
    pub async fn resolve(&self, hostname: &str, original_url: &Url) -> Resolution {
        let outcome = self.resolve_inner(hostname, original_url).await;
        debug!(hostname, outcome = outcome.kind(), "resolution finished");
        outcome
    }

    async fn resolve_inner(&self, hostname: &str, original_url: &Url) -> Resolution {
        if let Some(url) = self.routes.get(hostname) {
            debug!(hostname, url = %url, "serving custom route");
            return Resolution::StaticRedirect { url: url.clone() };
        }

        let dotted_suffix = format!(".{}", self.config.hostname_suffix);
        if let Some(cut) = hostname.strip_suffix(&dotted_suffix) {
            if let Some(url) = self.routes.get(cut) {
                debug!(hostname, cut, url = %url, "serving custom route for stripped hostname");
                return Resolution::StaticRedirect { url: url.clone() };
            }
        }

        if self.config.redirect_to_nomad_ui
            && (hostname.ends_with(&self.config.hostname_suffix)
                || hostname == self.config.nomad_ui_hostname)
        {
            return self.nomad_ui_redirect(hostname, original_url);
        }

        let address = ServiceAddress::parse(hostname);
        if !address.is_service() {
            debug!(hostname, "hostname is not a service address");
            return Resolution::ParseError {
                hostname: hostname.to_string(),
            };
        }

        let mut entries = match self.lookup(hostname, &address).await {
            Ok(entries) => entries,
            Err(source) => {
                warn!(hostname, error = %source, "catalog query failed");
                return Resolution::QueryError {
                    hostname: hostname.to_string(),
                    source,
                };
            }
        };

        order_entries(&mut entries);

        if entries.len() == 1 {
            return self.single_redirect(hostname, original_url, &entries[0]);
        }

        let port_type_suffix = if address.port_type.is_empty() {
            String::new()
        } else {
            format!(" and port type {}", address.port_type)
        };

        if entries.is_empty() {
            debug!(hostname, service = %address.service, "no catalog results");
            return Resolution::NoResults {
                service: address.service,
                port_type_suffix,
            };
        }

        self.list_results(hostname, original_url, address.service, port_type_suffix, &entries)
    }

    /// Fixed-port redirect into the Nomad UI. A request for the bare
    /// root lands on the clients view, pre-searched for the hostname.
    fn nomad_ui_redirect(&self, hostname: &str, original_url: &Url) -> Resolution {
        match build_with_port(hostname, original_url, "http", NOMAD_UI_PORT) {
            Ok(mut url) => {
                if url.path().is_empty() || url.path() == "/" {
                    url.set_path("/ui/clients");
                    url.set_query(Some(&format!("search={hostname}")));
                }
                info!(hostname, url = %url, "redirecting to the nomad ui");
                Resolution::UiRedirect { url }
            }
            Err(source) => {
                warn!(hostname, error = %source, "failed to build nomad ui redirect");
                Resolution::UrlBuildError {
                    hostname: hostname.to_string(),
                    source,
                }
            }
        }
    }

    async fn lookup(
        &self,
        hostname: &str,
        address: &ServiceAddress,
    ) -> signpost_core::Result<Vec<CatalogEntry>> {
        // Nothing to ask the catalog for.
        if address.service.is_empty() && address.port_type.is_empty() {
            return Ok(Vec::new());
        }

        let entries = self
            .catalog
            .service(&address.service, &address.port_type)
            .await?;
        info!(hostname, options = entries.len(), "catalog options found");
        Ok(entries)
    }

    /// A lone catalog match redirects with the hostname the request
    /// came in with, not the node hostname.
    fn single_redirect(
        &self,
        hostname: &str,
        original_url: &Url,
        entry: &CatalogEntry,
    ) -> Resolution {
        match build_with_port(hostname, original_url, entry.guess_scheme(), entry.port) {
            Ok(url) => {
                info!(hostname, url = %url, "redirecting to single catalog match");
                Resolution::SingleRedirect { url }
            }
            Err(source) => {
                warn!(hostname, error = %source, "failed to build redirect url");
                Resolution::UrlBuildError {
                    hostname: hostname.to_string(),
                    source,
                }
            }
        }
    }

    /// Listing entries link to each node itself, qualified with the
    /// cluster suffix.
    fn list_results(
        &self,
        hostname: &str,
        original_url: &Url,
        service: String,
        port_type_suffix: String,
        entries: &[CatalogEntry],
    ) -> Resolution {
        let mut resolved = Vec::with_capacity(entries.len());

        for entry in entries {
            let full_hostname = qualify_hostname(&entry.hostname, &self.config.hostname_suffix);
            let url = match build_with_port(
                &full_hostname,
                original_url,
                entry.guess_scheme(),
                entry.port,
            ) {
                Ok(url) => url,
                Err(source) => {
                    warn!(hostname, node = %full_hostname, error = %source, "failed to build listing url");
                    return Resolution::UrlBuildError {
                        hostname: hostname.to_string(),
                        source,
                    };
                }
            };

            let tags_display = if entry.tags.is_empty() {
                String::new()
            } else {
                format!(" ({})", entry.tags.join(", "))
            };

            resolved.push(ResolvedEntry {
                url,
                full_hostname,
                port: entry.port,
                tags_display,
            });
        }

        debug!(hostname, options = resolved.len(), "listing catalog matches");
        Resolution::MultipleResults {
            service,
            port_type_suffix,
            entries: resolved,
        }
    }
}
