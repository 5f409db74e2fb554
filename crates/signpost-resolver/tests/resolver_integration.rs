//! Precedence-chain tests for the resolver against in-memory catalogs.

use async_trait::async_trait;
use signpost_catalog::StaticCatalog;
use signpost_core::{Catalog, CatalogEntry, CatalogError};
use signpost_resolver::{Resolution, Resolver, ResolverConfig, RouteTable};
use url::Url;

/// Catalog stub whose every query fails.
struct FailingCatalog;

#[async_trait]
impl Catalog for FailingCatalog {
    async fn service(&self, _: &str, _: &str) -> signpost_core::Result<Vec<CatalogEntry>> {
        Err(CatalogError::Other(anyhow::anyhow!("agent is down")))
    }
}

fn entry(hostname: &str, port: u16, tags: &[&str]) -> CatalogEntry {
    CatalogEntry {
        hostname: hostname.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        port,
    }
}

fn original(url: &str) -> Url {
    Url::parse(url).unwrap()
}

fn routes(raw: &str) -> RouteTable {
    RouteTable::from_json(raw).unwrap()
}

#[tokio::test]
async fn static_route_wins_over_catalog_state() {
    let catalog = StaticCatalog::new();
    catalog.register("web", entry("node1", 8080, &[]));

    let resolver = Resolver::new(
        ResolverConfig::builder().build(),
        routes(r#"{"web.service.consul": "http://docs.internal/"}"#),
        catalog,
    );

    let outcome = resolver
        .resolve("web.service.consul", &original("http://web.service.consul/"))
        .await;

    match outcome {
        Resolution::StaticRedirect { url } => assert_eq!(url.as_str(), "http://docs.internal/"),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn suffix_stripped_hostname_reaches_the_route_table() {
    let resolver = Resolver::new(
        ResolverConfig::builder().hostname_suffix("node.consul").build(),
        routes(r#"{"wiki": "http://docs.internal/wiki"}"#),
        StaticCatalog::new(),
    );

    let outcome = resolver
        .resolve("wiki.node.consul", &original("http://wiki.node.consul/"))
        .await;

    match outcome {
        Resolution::StaticRedirect { url } => {
            assert_eq!(url.as_str(), "http://docs.internal/wiki");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn static_route_beats_the_ui_shortcut() {
    let resolver = Resolver::new(
        ResolverConfig::builder()
            .hostname_suffix("node.consul")
            .redirect_to_nomad_ui(true)
            .build(),
        routes(r#"{"grafana.node.consul": "https://grafana.internal/"}"#),
        StaticCatalog::new(),
    );

    let outcome = resolver
        .resolve(
            "grafana.node.consul",
            &original("http://grafana.node.consul/"),
        )
        .await;

    assert!(matches!(outcome, Resolution::StaticRedirect { .. }));
}

#[tokio::test]
async fn ui_shortcut_sends_bare_requests_to_the_clients_view() {
    let resolver = Resolver::new(
        ResolverConfig::builder()
            .hostname_suffix("node.consul")
            .redirect_to_nomad_ui(true)
            .build(),
        RouteTable::default(),
        StaticCatalog::new(),
    );

    let outcome = resolver
        .resolve("node1.node.consul", &original("http://node1.node.consul/"))
        .await;

    match outcome {
        Resolution::UiRedirect { url } => {
            assert_eq!(
                url.as_str(),
                "http://node1.node.consul:4646/ui/clients?search=node1.node.consul"
            );
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn ui_shortcut_preserves_a_deep_path() {
    let resolver = Resolver::new(
        ResolverConfig::builder()
            .hostname_suffix("node.consul")
            .redirect_to_nomad_ui(true)
            .build(),
        RouteTable::default(),
        StaticCatalog::new(),
    );

    let outcome = resolver
        .resolve(
            "node1.node.consul",
            &original("http://node1.node.consul/ui/jobs?namespace=default"),
        )
        .await;

    match outcome {
        Resolution::UiRedirect { url } => {
            assert_eq!(
                url.as_str(),
                "http://node1.node.consul:4646/ui/jobs?namespace=default"
            );
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn ui_shortcut_matches_the_configured_ui_hostname() {
    let resolver = Resolver::new(
        ResolverConfig::builder()
            .hostname_suffix("cluster.internal")
            .nomad_ui_hostname("nomad.example.com")
            .redirect_to_nomad_ui(true)
            .build(),
        RouteTable::default(),
        StaticCatalog::new(),
    );

    let outcome = resolver
        .resolve("nomad.example.com", &original("http://nomad.example.com/"))
        .await;

    match outcome {
        Resolution::UiRedirect { url } => {
            assert_eq!(url.host_str(), Some("nomad.example.com"));
            assert_eq!(url.port(), Some(4646));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn ui_shortcut_disabled_falls_through_to_the_catalog() {
    let resolver = Resolver::new(
        ResolverConfig::builder().hostname_suffix("consul").build(),
        RouteTable::default(),
        StaticCatalog::new(),
    );

    let outcome = resolver
        .resolve("web.service.consul", &original("http://web.service.consul/"))
        .await;

    assert!(matches!(outcome, Resolution::NoResults { .. }));
}

#[tokio::test]
async fn port_type_narrows_the_catalog_query() {
    let catalog = StaticCatalog::new();
    catalog.register("web", entry("node1", 8080, &["http"]));
    catalog.register("web", entry("node1", 9100, &["metrics"]));

    let resolver = Resolver::new(ResolverConfig::builder().build(), RouteTable::default(), catalog);

    let outcome = resolver
        .resolve(
            "metrics.web.service.consul",
            &original("http://metrics.web.service.consul/"),
        )
        .await;

    match outcome {
        Resolution::SingleRedirect { url } => {
            // Single matches keep the request hostname.
            assert_eq!(url.as_str(), "http://metrics.web.service.consul:9100/");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn catalog_failure_surfaces_as_a_query_error() {
    let resolver = Resolver::new(
        ResolverConfig::builder().build(),
        RouteTable::default(),
        FailingCatalog,
    );

    let outcome = resolver
        .resolve("web.service.consul", &original("http://web.service.consul/"))
        .await;

    match outcome {
        Resolution::QueryError { hostname, source } => {
            assert_eq!(hostname, "web.service.consul");
            assert!(source.to_string().contains("agent is down"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn empty_suffix_sends_everything_to_the_ui_when_enabled() {
    // Deployed behavior: with no suffix configured, the ends-with check
    // matches every hostname once the shortcut is on.
    let resolver = Resolver::new(
        ResolverConfig::builder().redirect_to_nomad_ui(true).build(),
        RouteTable::default(),
        StaticCatalog::new(),
    );

    let outcome = resolver
        .resolve("anything.example.com", &original("http://anything.example.com/"))
        .await;

    assert!(matches!(outcome, Resolution::UiRedirect { .. }));
}
