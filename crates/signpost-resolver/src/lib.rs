//! Hostname resolution engine for the signpost redirector.
//!
//! [`Resolver`] turns a request hostname and URL into a [`Resolution`]:
//! a redirect target, a listing of catalog matches, or a typed error
//! for the presentation layer to render. Operator-configured routes are
//! consulted first, then the Nomad UI shortcut, then the service
//! catalog.
//!
//! # Example
//!
//! ```rust,no_run
//! use signpost_resolver::{Resolution, Resolver, ResolverConfig, RouteTable};
//! use signpost_catalog::ConsulCatalog;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ResolverConfig::builder()
//!     .hostname_suffix("node.consul")
//!     .build();
//! let routes = RouteTable::from_json(r#"{"wiki": "http://docs.internal/"}"#)?;
//! let catalog = ConsulCatalog::new("http://127.0.0.1:8500")?;
//!
//! let resolver = Resolver::new(config, routes, catalog);
//!
//! let original = url::Url::parse("http://web.service.consul/search?q=1")?;
//! match resolver.resolve("web.service.consul", &original).await {
//!     Resolution::SingleRedirect { url } => println!("redirect to {url}"),
//!     other => println!("{}", other.kind()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod order;
pub mod outcome;
pub mod resolver;
pub mod routes;
pub mod target;

pub use config::ResolverConfig;
pub use outcome::{Resolution, ResolvedEntry};
pub use resolver::{Resolver, NOMAD_UI_PORT};
pub use routes::{RouteTable, RouteTableError};
pub use target::TargetError;
