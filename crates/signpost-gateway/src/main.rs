use clap::Parser;
use signpost_catalog::ConsulCatalog;
use signpost_gateway::app::App;
use signpost_gateway::cli::CLI;
use signpost_gateway::state::{AppState, UiLinks};
use signpost_resolver::{Resolver, ResolverConfig, RouteTable};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = CLI::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        hostname_suffix = %config.hostname_suffix,
        redirect_to_nomad_ui = config.redirect_to_nomad_ui,
        consul_http_addr = %config.consul_http_addr,
        "starting signpost gateway"
    );

    let routes = RouteTable::from_json(&config.custom_routes)?;
    if !routes.is_empty() {
        info!(routes = routes.len(), "loaded custom routes");
    }

    let catalog = ConsulCatalog::new(&config.consul_http_addr)?;
    let resolver = Resolver::new(
        ResolverConfig::builder()
            .hostname_suffix(config.hostname_suffix)
            .nomad_ui_hostname(config.nomad_ui_hostname.clone())
            .redirect_to_nomad_ui(config.redirect_to_nomad_ui)
            .build(),
        routes,
        catalog,
    );

    let state = AppState::new(
        resolver,
        UiLinks {
            nomad_hostname: config.nomad_ui_hostname,
            consul_hostname: config.consul_ui_hostname,
        },
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state)).await?;

    Ok(())
}
