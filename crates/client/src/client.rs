//! `reqwest` implementation of the catalog API

use async_trait::async_trait;
use catalog_core::{
    BulkDeleteResult, CatalogApi, ConsoleConfig, ConsoleError, ConsoleResult, Product, ProductId,
    ProductPage, ProductPayload, ProductQuery, UploadReceipt, UploadTask, Webhook, WebhookId,
    WebhookPayload, WebhookTestResult,
};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// MIME type sent with uploaded files
const CSV_MIME: &str = "text/csv";

// ============================================================================
// API Client
// ============================================================================

/// HTTP client for the catalog REST API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// The underlying reqwest HTTP client.
    client: Client,
    /// Origin of the API, without a trailing slash.
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given origin using transport defaults.
    pub fn new(base_url: impl Into<String>) -> ConsoleResult<Self> {
        Self::build(base_url.into(), None)
    }

    /// Create a client from the console configuration.
    pub fn from_config(config: &ConsoleConfig) -> ConsoleResult<Self> {
        Self::build(config.base_url().to_string(), config.request_timeout())
    }

    fn build(base_url: String, timeout: Option<Duration>) -> ConsoleResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ConsoleError::config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Origin every path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for an API endpoint path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!("{} {}", method, path);
        self.client.request(method, self.url(path))
    }

    // ========================================================================
    // Generic request helpers
    // ========================================================================

    /// Send a request and deserialise the JSON response.
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ConsoleResult<T> {
        let response = self.send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ConsoleError::Decode(e.to_string()))
    }

    /// Send a request whose success body is ignored.
    async fn send_unit(&self, request: RequestBuilder) -> ConsoleResult<()> {
        self.send(request).await.map(|_| ())
    }

    /// Send a request and turn non-2xx responses into errors.
    async fn send(&self, request: RequestBuilder) -> ConsoleResult<Response> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            let detail = extract_detail(&body);
            tracing::warn!(
                "API returned {}{}",
                status.as_u16(),
                detail
                    .as_deref()
                    .map(|d| format!(": {}", d))
                    .unwrap_or_default()
            );
            Err(ConsoleError::api(status.as_u16(), detail))
        }
    }
}

#[async_trait]
impl CatalogApi for ApiClient {
    // ========================================================================
    // Import
    // ========================================================================

    async fn upload_csv(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> ConsoleResult<UploadReceipt> {
        let part = Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str(CSV_MIME)
            .map_err(transport_error)?;
        let form = Form::new().part("file", part);

        self.send_json(self.request(Method::POST, "/api/upload").multipart(form))
            .await
    }

    async fn upload_status(&self, task_id: &str) -> ConsoleResult<UploadTask> {
        let path = format!("/api/upload/{}/status", task_id);
        self.send_json(self.request(Method::GET, &path)).await
    }

    // ========================================================================
    // Products
    // ========================================================================

    async fn list_products(&self, query: &ProductQuery) -> ConsoleResult<ProductPage> {
        let request = self
            .request(Method::GET, "/api/products")
            .query(&query.to_query_pairs());
        self.send_json(request).await
    }

    async fn get_product(&self, id: ProductId) -> ConsoleResult<Product> {
        let path = format!("/api/products/{}", id);
        self.send_json(self.request(Method::GET, &path)).await
    }

    async fn create_product(&self, payload: &ProductPayload) -> ConsoleResult<Product> {
        self.send_json(self.request(Method::POST, "/api/products").json(payload))
            .await
    }

    async fn update_product(
        &self,
        id: ProductId,
        payload: &ProductPayload,
    ) -> ConsoleResult<Product> {
        let path = format!("/api/products/{}", id);
        self.send_json(self.request(Method::PUT, &path).json(payload))
            .await
    }

    async fn delete_product(&self, id: ProductId) -> ConsoleResult<()> {
        let path = format!("/api/products/{}", id);
        self.send_unit(self.request(Method::DELETE, &path)).await
    }

    async fn delete_all_products(&self) -> ConsoleResult<BulkDeleteResult> {
        self.send_json(self.request(Method::DELETE, "/api/products"))
            .await
    }

    // ========================================================================
    // Webhooks
    // ========================================================================

    async fn list_webhooks(&self) -> ConsoleResult<Vec<Webhook>> {
        self.send_json(self.request(Method::GET, "/api/webhooks"))
            .await
    }

    async fn get_webhook(&self, id: WebhookId) -> ConsoleResult<Webhook> {
        let path = format!("/api/webhooks/{}", id);
        self.send_json(self.request(Method::GET, &path)).await
    }

    async fn create_webhook(&self, payload: &WebhookPayload) -> ConsoleResult<Webhook> {
        self.send_json(self.request(Method::POST, "/api/webhooks").json(payload))
            .await
    }

    async fn update_webhook(
        &self,
        id: WebhookId,
        payload: &WebhookPayload,
    ) -> ConsoleResult<Webhook> {
        let path = format!("/api/webhooks/{}", id);
        self.send_json(self.request(Method::PUT, &path).json(payload))
            .await
    }

    async fn delete_webhook(&self, id: WebhookId) -> ConsoleResult<()> {
        let path = format!("/api/webhooks/{}", id);
        self.send_unit(self.request(Method::DELETE, &path)).await
    }

    async fn test_webhook(&self, id: WebhookId) -> ConsoleResult<WebhookTestResult> {
        let path = format!("/api/webhooks/{}/test", id);
        self.send_json(self.request(Method::POST, &path)).await
    }
}

// ============================================================================
// Error mapping
// ============================================================================

/// Error body convention of the API: `{"detail": "..."}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

/// Pull a string `detail` out of an error body.
///
/// Validation failures carry a list of objects under `detail`; those are not
/// fit to show verbatim and yield `None`.
fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        Value::String(detail) if !detail.is_empty() => Some(detail),
        _ => None,
    }
}

fn transport_error(err: reqwest::Error) -> ConsoleError {
    tracing::warn!("Request failed: {}", err);
    ConsoleError::transport(err.to_string())
}

// ============================================================================
// Tests
// ============================================================================
