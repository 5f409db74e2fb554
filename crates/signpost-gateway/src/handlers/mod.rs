mod health;
mod resolve;

pub use health::{health_handler, metrics_handler};
pub use resolve::resolve_handler;
