//! # Catalog Client
//!
//! Type-safe HTTP client for the catalog REST API, built on `reqwest`.
//!
//! `ApiClient` implements [`CatalogApi`](catalog_core::CatalogApi): one
//! method per endpoint, JSON bodies in and out, and every non-2xx response
//! surfaced as [`ConsoleError::Api`](catalog_core::ConsoleError::Api) with
//! the server's `detail` message when it sent one.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_client::ApiClient;
//! use catalog_core::{CatalogApi, ProductQuery};
//!
//! let client = ApiClient::new("http://127.0.0.1:8000")?;
//! let page = client.list_products(&ProductQuery::page(0, 50)).await?;
//! ```

pub mod client;

pub use client::ApiClient;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
