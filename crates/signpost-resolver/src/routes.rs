use std::collections::HashMap;

use thiserror::Error;
use url::Url;

/// Operator-configured exact-match redirects, keyed by hostname.
///
/// Loaded once at startup from a JSON object of hostname to target
/// URL and immutable afterwards. Targets are validated at load so a
/// matching route always redirects to a well-formed absolute URL.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, Url>,
}

#[derive(Debug, Error)]
pub enum RouteTableError {
    #[error("custom routes are not a valid json object: {0}")]
    Json(#[from] serde_json::Error),
    #[error("route target for '{hostname}' is not a valid url: {source}")]
    Target {
        hostname: String,
        source: url::ParseError,
    },
}

impl RouteTable {
    /// Parses the custom-routes flag value. An empty string or `{}`
    /// yields an empty table.
    pub fn from_json(raw: &str) -> Result<Self, RouteTableError> {
        if raw.is_empty() || raw == "{}" {
            return Ok(Self::default());
        }

        let parsed: HashMap<String, String> = serde_json::from_str(raw)?;

        let mut routes = HashMap::with_capacity(parsed.len());
        for (hostname, target) in parsed {
            let url = Url::parse(&target).map_err(|source| RouteTableError::Target {
                hostname: hostname.clone(),
                source,
            })?;
            routes.insert(hostname, url);
        }

        Ok(Self { routes })
    }

    /// Looks up an exact hostname match.
    pub fn get(&self, hostname: &str) -> Option<&Url> {
        self.routes.get(hostname)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
