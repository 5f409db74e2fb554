use clap::Parser;
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "SIGNPOST_LISTEN_ADDR";
pub const HOSTNAME_SUFFIX_ENV: &str = "SIGNPOST_HOSTNAME_SUFFIX";
pub const NOMAD_UI_HOSTNAME_ENV: &str = "SIGNPOST_NOMAD_UI_HOSTNAME";
pub const CONSUL_UI_HOSTNAME_ENV: &str = "SIGNPOST_CONSUL_UI_HOSTNAME";
pub const REDIRECT_TO_NOMAD_UI_ENV: &str = "SIGNPOST_REDIRECT_TO_NOMAD_UI";
pub const CUSTOM_ROUTES_ENV: &str = "SIGNPOST_CUSTOM_ROUTES";
pub const CONSUL_HTTP_ADDR_ENV: &str = "SIGNPOST_CONSUL_HTTP_ADDR";

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:80";
pub const DEFAULT_CONSUL_HTTP_ADDR: &str = "http://127.0.0.1:8500";

#[derive(Debug, Parser)]
#[command(name = "signpost-gateway")]
pub struct CLI {
    /// Address to serve HTTP on.
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// The hostname suffix for nodes in the cluster.
    #[arg(long, env = HOSTNAME_SUFFIX_ENV, default_value = "")]
    pub hostname_suffix: String,

    /// The hostname to link to for viewing the Nomad UI.
    #[arg(long, env = NOMAD_UI_HOSTNAME_ENV, default_value = "")]
    pub nomad_ui_hostname: String,

    /// The hostname to link to for viewing the Consul UI.
    #[arg(long, env = CONSUL_UI_HOSTNAME_ENV, default_value = "")]
    pub consul_ui_hostname: String,

    /// Redirect to the Nomad UI when a hostname carries the suffix.
    #[arg(long, env = REDIRECT_TO_NOMAD_UI_ENV)]
    pub redirect_to_nomad_ui: bool,

    /// A JSON key-value map of custom routings based on hostname.
    #[arg(long, env = CUSTOM_ROUTES_ENV, default_value = "{}")]
    pub custom_routes: String,

    /// Address of the Consul agent's HTTP API.
    #[arg(long, env = CONSUL_HTTP_ADDR_ENV, default_value = DEFAULT_CONSUL_HTTP_ADDR)]
    pub consul_http_addr: String,
}
