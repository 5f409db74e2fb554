//! HTML presentation for resolution outcomes.
//!
//! The resolver produces plain values; every fragment of markup lives
//! here. Interpolated values are escaped.

use signpost_resolver::{ResolvedEntry, NOMAD_UI_PORT};

use crate::state::UiLinks;

/// Port the Consul UI serves on.
const CONSUL_UI_PORT: u16 = 8500;

/// The accepted service-address forms, shown next to parse and
/// no-result pages.
pub const HOSTNAME_TIPS: &str = "\n<p>The hostname should be in one of these formats:</p>\n<ul>\n<li><b>ServiceName</b>.service.consul</li>\n<li><b>PortName</b>.<b>ServiceName</b>.service.consul</li>\n<li><b>ServiceName</b>.service.<b>DatacenterName</b>.consul</li>\n<li><b>PortName</b>.<b>ServiceName</b>.service.<b>DatacenterName</b>.consul</li>\n</ul>\n";

pub fn parse_error(hostname: &str) -> String {
    format!(
        "<p>Could not parse hostname <code>{}</code> as a Consul service address</p>\n",
        escape(hostname)
    )
}

pub fn query_error(hostname: &str, error: &str) -> String {
    format!(
        "<p>Error querying Consul for {}: {}</p>\n",
        escape(hostname),
        escape(error)
    )
}

pub fn url_build_error(hostname: &str, error: &str) -> String {
    format!(
        "<p>Error building URL with {}: {}</p>\n",
        escape(hostname),
        escape(error)
    )
}

pub fn no_results(service: &str, port_type_suffix: &str) -> String {
    format!(
        "<p>No results found for service <code>{}</code>{} in Consul</p>\n",
        escape(service),
        escape(port_type_suffix)
    )
}

pub fn results_list(service: &str, port_type_suffix: &str, entries: &[ResolvedEntry]) -> String {
    let mut body = format!(
        "<p>Consul service ports found for service <code>{}</code>{} in Consul</p>\n<ul>\n",
        escape(service),
        escape(port_type_suffix)
    );

    for entry in entries {
        body.push_str(&format!(
            "<li>\n\t<a href=\"{}\">\n\t\t{} port {}{}\n\t</a>\n</li>\n",
            escape(entry.url.as_str()),
            escape(&entry.full_hostname),
            entry.port,
            escape(&entry.tags_display)
        ));
    }

    body.push_str("</ul>\n");
    body
}

/// Quick links to the cluster UIs. Configured hostnames win; otherwise
/// the links point at the hostname the request came in with.
pub fn quick_links(links: &UiLinks, request_hostname: &str) -> String {
    let nomad = pick(&links.nomad_hostname, request_hostname);
    let consul = pick(&links.consul_hostname, request_hostname);

    format!(
        "\n<p>Quick links:</p>\n<ul>\n<li><a href=\"http://{}:{}/ui/\">Nomad UI</a></li>\n<li><a href=\"http://{}:{}/ui/\">Consul UI</a></li>\n</ul>\n",
        escape(nomad),
        NOMAD_UI_PORT,
        escape(consul),
        CONSUL_UI_PORT
    )
}

fn pick<'a>(configured: &'a str, fallback: &'a str) -> &'a str {
    if configured.is_empty() {
        fallback
    } else {
        configured
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
