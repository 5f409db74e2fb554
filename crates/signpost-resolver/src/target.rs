use thiserror::Error;
use url::Url;

pub type Result<T> = std::result::Result<T, TargetError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("request url could not be re-parsed: {0}")]
    Reparse(String),
    #[error("scheme '{0}' cannot be applied to the request url")]
    Scheme(String),
    #[error("hostname '{0}' is not a valid url host")]
    Host(String),
    #[error("port {0} cannot be applied to the request url")]
    Port(u16),
}

/// Builds the redirect target for `hostname:port`.
///
/// The request's path and query are carried over verbatim; scheme and
/// host are overwritten. The original URL is never mutated.
pub fn build_with_port(hostname: &str, original: &Url, scheme: &str, port: u16) -> Result<Url> {
    let mut url =
        Url::parse(original.as_str()).map_err(|e| TargetError::Reparse(e.to_string()))?;

    url.set_scheme(scheme)
        .map_err(|()| TargetError::Scheme(scheme.to_string()))?;
    url.set_host(Some(hostname))
        .map_err(|_| TargetError::Host(hostname.to_string()))?;
    url.set_port(Some(port))
        .map_err(|()| TargetError::Port(port))?;

    Ok(url)
}

/// Appends the cluster suffix to a node hostname. A single leading `.`
/// on the configured suffix is tolerated.
pub fn qualify_hostname(hostname: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        return hostname.to_string();
    }

    format!("{hostname}.{}", suffix.strip_prefix('.').unwrap_or(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_scheme_host_and_port() {
        let original = Url::parse("http://old.example/x?q=1").unwrap();
        let url = build_with_port("h", &original, "https", 8080).unwrap();

        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("h"));
        assert_eq!(url.port(), Some(8080));
        assert_eq!(url.path(), "/x");
        assert_eq!(url.query(), Some("q=1"));
        assert_eq!(url.as_str(), "https://h:8080/x?q=1");
    }

    #[test]
    fn original_url_is_untouched() {
        let original = Url::parse("http://old.example/x?q=1").unwrap();
        let _ = build_with_port("h", &original, "https", 8080).unwrap();

        assert_eq!(original.as_str(), "http://old.example/x?q=1");
    }

    #[test]
    fn bare_path_is_preserved() {
        let original = Url::parse("http://old.example/").unwrap();
        let url = build_with_port("node1", &original, "http", 4646).unwrap();

        assert_eq!(url.as_str(), "http://node1:4646/");
    }

    #[test]
    fn unusable_scheme_is_an_error() {
        let original = Url::parse("http://old.example/").unwrap();
        let err = build_with_port("h", &original, "data", 80).unwrap_err();

        assert_eq!(err, TargetError::Scheme("data".to_string()));
    }

    #[test]
    fn invalid_hostname_is_an_error() {
        let original = Url::parse("http://old.example/").unwrap();
        let err = build_with_port("bad host", &original, "http", 80).unwrap_err();

        assert!(matches!(err, TargetError::Host(_)));
    }

    #[test]
    fn qualify_appends_suffix_once() {
        assert_eq!(qualify_hostname("node1", "node.consul"), "node1.node.consul");
        assert_eq!(qualify_hostname("node1", ".node.consul"), "node1.node.consul");
        assert_eq!(qualify_hostname("node1", ""), "node1");
    }
}
