//! HTTP gateway for the signpost redirector.
//!
//! Wires the resolver and a catalog backend into an axum router:
//! health/metrics endpoints answer directly, every other request has
//! its hostname resolved and is answered with a redirect or an HTML
//! page.

pub mod app;
pub mod cli;
pub mod handlers;
pub mod render;
pub mod state;

pub use app::App;
pub use state::{AppState, UiLinks};
