//! Core types and traits for the signpost service redirector.
//!
//! This crate provides the service-address grammar, the catalog record
//! type and the `Catalog` trait shared by the catalog backends and the
//! resolver.

pub mod address;
pub mod catalog;
pub mod error;

pub use address::ServiceAddress;
pub use catalog::{Catalog, CatalogEntry};
pub use error::{CatalogError, Result};
