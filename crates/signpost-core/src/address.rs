/// A hostname parsed as a Consul-style service address.
///
/// Accepted forms, with `service` and `port_type` pulled out of the
/// leading labels:
///
/// - `ServiceName.service.consul`
/// - `PortName.ServiceName.service.consul`
/// - `ServiceName.service.DatacenterName.consul`
/// - `PortName.ServiceName.service.DatacenterName.consul`
///
/// An empty `service` is the sentinel for "this hostname is not a
/// service address"; parsing never fails with an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceAddress {
    /// The logical service name to look up in the catalog.
    pub service: String,
    /// The named port on the service, empty when the address does not
    /// pick one.
    pub port_type: String,
}

impl ServiceAddress {
    /// Parses a hostname into a service name and port type.
    ///
    /// The hostname is split on the first `.service.` marker and the
    /// left side (the whole hostname when the marker is absent) is the
    /// candidate segment. A candidate without a dot is the service name
    /// alone; a candidate with a dot reads as `PortName.ServiceName`,
    /// with a leading `_` stripped from each label. If the service part
    /// still contains a dot after that split the candidate was an IP
    /// address or a deeper DNS name, and the whole parse is rejected.
    pub fn parse(hostname: &str) -> Self {
        let candidate = hostname
            .split_once(".service.")
            .map_or(hostname, |(left, _)| left);

        match candidate.split_once('.') {
            None => Self {
                service: candidate.to_string(),
                port_type: String::new(),
            },
            Some((port_type, service)) => {
                let port_type = port_type.strip_prefix('_').unwrap_or(port_type);
                let service = service.strip_prefix('_').unwrap_or(service);

                // don't parse IP addresses
                if service.contains('.') {
                    return Self::opaque();
                }

                Self {
                    service: service.to_string(),
                    port_type: port_type.to_string(),
                }
            }
        }
    }

    /// A rejected parse: both fields empty.
    fn opaque() -> Self {
        Self {
            service: String::new(),
            port_type: String::new(),
        }
    }

    /// Whether the hostname parsed as a service address.
    pub fn is_service(&self) -> bool {
        !self.service.is_empty()
    }
}
