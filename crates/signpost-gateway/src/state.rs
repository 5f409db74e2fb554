use std::sync::Arc;

use signpost_resolver::Resolver;

/// Hostnames for the quick-links block. Empty fields fall back to the
/// request hostname.
#[derive(Debug, Clone, Default)]
pub struct UiLinks {
    pub nomad_hostname: String,
    pub consul_hostname: String,
}

/// Shared request state: the resolver and the quick-link targets.
pub struct AppState<C> {
    resolver: Arc<Resolver<C>>,
    links: UiLinks,
}

impl<C> AppState<C> {
    pub fn new(resolver: Resolver<C>, links: UiLinks) -> Self {
        Self {
            resolver: Arc::new(resolver),
            links,
        }
    }

    pub fn resolver(&self) -> &Resolver<C> {
        &self.resolver
    }

    pub fn links(&self) -> &UiLinks {
        &self.links
    }
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
            links: self.links.clone(),
        }
    }
}
