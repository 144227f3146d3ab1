//! # Catalog Core
//!
//! Core types, traits, and error handling for Catalog Admin.
//!
//! This crate provides the foundational building blocks shared by the
//! HTTP client, the controllers, the desktop UI and the CLI:
//!
//! - **Types**: Products, webhooks, request payloads and API responses
//! - **Traits**: The `CatalogApi` seam every controller talks through
//! - **Errors**: Unified error handling with `ConsoleError` and `ConsoleResult`
//! - **Config**: `ConsoleConfig`, loaded from a TOML file and the environment
//!

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use config::ConsoleConfig;
pub use error::{ConsoleError, ConsoleResult};
pub use traits::CatalogApi;
pub use types::{
    BulkDeleteResult, EventType, Product, ProductId, ProductPage, ProductPayload, ProductQuery,
    UploadReceipt, UploadStatus, UploadTask, Webhook, WebhookId, WebhookPayload,
    WebhookTestResult,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
