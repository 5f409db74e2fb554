use typed_builder::TypedBuilder;

/// Resolver configuration, constructed once at startup and immutable
/// afterwards. All resolution decisions read from this struct; there
/// are no ambient configuration reads inside the engine.
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct ResolverConfig {
    /// Hostname suffix for nodes in the cluster, e.g. `node.consul`.
    #[builder(default, setter(into))]
    pub hostname_suffix: String,
    /// The hostname serving the Nomad UI.
    #[builder(default, setter(into))]
    pub nomad_ui_hostname: String,
    /// When set, hostnames carrying the suffix (or matching the Nomad
    /// UI hostname) redirect straight to the Nomad UI.
    #[builder(default)]
    pub redirect_to_nomad_ui: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_are_empty() {
        let config = ResolverConfig::builder().build();
        assert!(config.hostname_suffix.is_empty());
        assert!(config.nomad_ui_hostname.is_empty());
        assert!(!config.redirect_to_nomad_ui);
    }

    #[test]
    fn builder_sets_fields() {
        let config = ResolverConfig::builder()
            .hostname_suffix("node.consul")
            .nomad_ui_hostname("nomad.internal")
            .redirect_to_nomad_ui(true)
            .build();

        assert_eq!(config.hostname_suffix, "node.consul");
        assert_eq!(config.nomad_ui_hostname, "nomad.internal");
        assert!(config.redirect_to_nomad_ui);
    }
}
