//! Core traits for Catalog Admin
//!
//! The controllers never talk to `reqwest` directly. Everything that leaves
//! the process goes through [`CatalogApi`], so controllers can be exercised
//! against an in-memory fake and the HTTP client can be swapped out.

use async_trait::async_trait;

use crate::error::ConsoleResult;
use crate::types::{
    BulkDeleteResult, Product, ProductId, ProductPage, ProductPayload, ProductQuery,
    UploadReceipt, UploadTask, Webhook, WebhookId, WebhookPayload, WebhookTestResult,
};

// ============================================================================
// CatalogApi Trait
// ============================================================================

/// The REST surface the console consumes.
///
/// Every method maps to exactly one request. Implementations surface non-2xx
/// responses as [`ConsoleError::Api`](crate::ConsoleError::Api) and never
/// retry.
///
/// # Example
///
/// ```rust,ignore
/// use catalog_core::{CatalogApi, ProductQuery};
///
/// async fn first_page(api: &impl CatalogApi) -> usize {
///     let page = api.list_products(&ProductQuery::page(0, 50)).await?;
///     page.products.len()
/// }
/// ```
#[async_trait]
pub trait CatalogApi: Send + Sync {
    // ------------------------------------------------------------------------
    // Import
    // ------------------------------------------------------------------------

    /// `POST /api/upload` with the file as multipart field `file`
    async fn upload_csv(&self, file_name: &str, contents: Vec<u8>)
    -> ConsoleResult<UploadReceipt>;

    /// `GET /api/upload/{task_id}/status`
    async fn upload_status(&self, task_id: &str) -> ConsoleResult<UploadTask>;

    // ------------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------------

    /// `GET /api/products?skip&limit&search&active`
    async fn list_products(&self, query: &ProductQuery) -> ConsoleResult<ProductPage>;

    /// `GET /api/products/{id}`
    async fn get_product(&self, id: ProductId) -> ConsoleResult<Product>;

    /// `POST /api/products`
    async fn create_product(&self, payload: &ProductPayload) -> ConsoleResult<Product>;

    /// `PUT /api/products/{id}`
    async fn update_product(
        &self,
        id: ProductId,
        payload: &ProductPayload,
    ) -> ConsoleResult<Product>;

    /// `DELETE /api/products/{id}`
    async fn delete_product(&self, id: ProductId) -> ConsoleResult<()>;

    /// `DELETE /api/products`
    async fn delete_all_products(&self) -> ConsoleResult<BulkDeleteResult>;

    // ------------------------------------------------------------------------
    // Webhooks
    // ------------------------------------------------------------------------

    /// `GET /api/webhooks`
    async fn list_webhooks(&self) -> ConsoleResult<Vec<Webhook>>;

    /// `GET /api/webhooks/{id}`
    async fn get_webhook(&self, id: WebhookId) -> ConsoleResult<Webhook>;

    /// `POST /api/webhooks`
    async fn create_webhook(&self, payload: &WebhookPayload) -> ConsoleResult<Webhook>;

    /// `PUT /api/webhooks/{id}`
    async fn update_webhook(
        &self,
        id: WebhookId,
        payload: &WebhookPayload,
    ) -> ConsoleResult<Webhook>;

    /// `DELETE /api/webhooks/{id}`
    async fn delete_webhook(&self, id: WebhookId) -> ConsoleResult<()>;

    /// `POST /api/webhooks/{id}/test`
    async fn test_webhook(&self, id: WebhookId) -> ConsoleResult<WebhookTestResult>;
}
