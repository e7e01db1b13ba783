//! Async Rust client for the public storefront catalog API.
//!
//! Two read-only endpoints, fetched once per run by the UIs:
//!
//! - `GET /products` — the full product list
//! - `GET /products/categories` — the category names
//!
//! The client is deliberately thin: one GET per call, no retries, no
//! caching, no auth. Every failure mode (connection, status, payload)
//! surfaces through the single [`Error`] taxonomy.

pub mod client;
pub mod error;

pub use client::CatalogClient;
pub use error::Error;

/// The public storefront endpoint the binaries default to.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";
