//! In-memory `CatalogApi` for tests
//!
//! Behaves like the catalog server closely enough to drive controllers:
//! filtering, newest-first ordering, SKU uniqueness, and per-endpoint
//! failure injection. Every call is recorded.

use async_trait::async_trait;
use catalog_core::{
    BulkDeleteResult, CatalogApi, ConsoleError, ConsoleResult, EventType, Product, ProductId,
    ProductPage, ProductPayload, ProductQuery, UploadReceipt, UploadStatus, UploadTask, Webhook,
    WebhookId, WebhookPayload, WebhookTestResult,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// A recorded API call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    UploadCsv { file_name: String, size: usize },
    UploadStatus(String),
    ListProducts(ProductQuery),
    GetProduct(ProductId),
    CreateProduct(ProductPayload),
    UpdateProduct(ProductId, ProductPayload),
    DeleteProduct(ProductId),
    DeleteAllProducts,
    ListWebhooks,
    GetWebhook(WebhookId),
    CreateWebhook(WebhookPayload),
    UpdateWebhook(WebhookId, WebhookPayload),
    DeleteWebhook(WebhookId),
    TestWebhook(WebhookId),
}

/// Endpoint selector for failure injection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Upload,
    UploadStatus,
    ListProducts,
    GetProduct,
    CreateProduct,
    UpdateProduct,
    DeleteProduct,
    DeleteAllProducts,
    ListWebhooks,
    GetWebhook,
    CreateWebhook,
    UpdateWebhook,
    DeleteWebhook,
    TestWebhook,
}

/// How an injected failure surfaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    Api { status: u16, detail: Option<String> },
    Transport,
}

impl Failure {
    pub fn detail(status: u16, detail: &str) -> Self {
        Failure::Api {
            status,
            detail: Some(detail.to_string()),
        }
    }

    fn to_error(&self) -> ConsoleError {
        match self {
            Failure::Api { status, detail } => ConsoleError::api(*status, detail.clone()),
            Failure::Transport => ConsoleError::transport("connection refused"),
        }
    }
}

#[derive(Debug, Default)]
struct FakeState {
    calls: Vec<Call>,
    products: Vec<Product>,
    webhooks: Vec<Webhook>,
    tasks: HashMap<String, UploadTask>,
    failures: HashMap<Endpoint, Failure>,
    test_result: Option<WebhookTestResult>,
    /// Imports stay at this status instead of completing at once
    stalled_imports: Option<UploadStatus>,
    next_id: i64,
}

/// Fake catalog server
#[derive(Debug, Default)]
pub struct FakeApi {
    state: Mutex<FakeState>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `count` products with SKUs `SKU-001`, `SKU-002`, ...
    pub fn with_products(count: usize) -> Self {
        let api = Self::new();
        for n in 1..=count {
            api.seed_product(&format!("SKU-{:03}", n), &format!("Product {}", n), n % 2 == 1);
        }
        api
    }

    pub fn seed_product(&self, sku: &str, name: &str, active: bool) -> ProductId {
        let mut state = self.lock();
        state.next_id += 1;
        let id = state.next_id;
        state.products.push(Product {
            id,
            sku: sku.to_string(),
            name: name.to_string(),
            description: None,
            price: 10.0,
            active,
            created_at: None,
            updated_at: None,
        });
        id
    }

    pub fn seed_webhook(&self, url: &str, event_type: EventType) -> WebhookId {
        let mut state = self.lock();
        state.next_id += 1;
        let id = state.next_id;
        state.webhooks.push(Webhook {
            id,
            url: url.to_string(),
            event_type,
            enabled: true,
            created_at: None,
            updated_at: None,
        });
        id
    }

    /// Make every call to `endpoint` fail until cleared
    pub fn fail(&self, endpoint: Endpoint, failure: Failure) {
        self.lock().failures.insert(endpoint, failure);
    }

    pub fn clear_failure(&self, endpoint: Endpoint) {
        self.lock().failures.remove(&endpoint);
    }

    pub fn set_test_result(&self, result: WebhookTestResult) {
        self.lock().test_result = Some(result);
    }

    /// Keep every later import at `status` with no rows processed
    pub fn stall_imports(&self, status: UploadStatus) {
        self.lock().stalled_imports = Some(status);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    pub fn product_count(&self) -> usize {
        self.lock().products.len()
    }

    pub fn webhook_count(&self) -> usize {
        self.lock().webhooks.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        // A panicking test poisons the lock; later assertions still want the data
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Record the call and return the injected failure, if any
    fn enter(&self, call: Call, endpoint: Endpoint) -> ConsoleResult<std::sync::MutexGuard<'_, FakeState>> {
        let mut state = self.lock();
        state.calls.push(call);
        match state.failures.get(&endpoint) {
            Some(failure) => Err(failure.to_error()),
            None => Ok(state),
        }
    }
}

fn not_found(what: &str) -> ConsoleError {
    ConsoleError::api(404, Some(format!("{} not found", what)))
}

fn matches_search(product: &Product, search: &str) -> bool {
    let needle = search.to_lowercase();
    product.sku.to_lowercase().contains(&needle)
        || product.name.to_lowercase().contains(&needle)
        || product
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&needle))
}

#[async_trait]
impl CatalogApi for FakeApi {
    async fn upload_csv(&self, file_name: &str, contents: Vec<u8>) -> ConsoleResult<UploadReceipt> {
        let call = Call::UploadCsv {
            file_name: file_name.to_string(),
            size: contents.len(),
        };
        let mut state = self.enter(call, Endpoint::Upload)?;
        let task_id = format!("task-{}", state.tasks.len() + 1);
        let rows = contents.iter().filter(|b| **b == b'\n').count().saturating_sub(1) as u64;
        let (status, progress, processed_rows) = match state.stalled_imports {
            Some(status) => (status, 0, 0),
            None => (UploadStatus::Completed, 100, rows),
        };
        state.tasks.insert(
            task_id.clone(),
            UploadTask {
                id: task_id.clone(),
                filename: file_name.to_string(),
                status,
                progress,
                total_rows: rows,
                processed_rows,
                error_message: None,
            },
        );
        Ok(UploadReceipt {
            task_id,
            filename: file_name.to_string(),
            message: Some("Upload started. Use task_id to track progress.".into()),
        })
    }

    async fn upload_status(&self, task_id: &str) -> ConsoleResult<UploadTask> {
        let state = self.enter(Call::UploadStatus(task_id.to_string()), Endpoint::UploadStatus)?;
        state.tasks.get(task_id).cloned().ok_or_else(|| not_found("Task"))
    }

    async fn list_products(&self, query: &ProductQuery) -> ConsoleResult<ProductPage> {
        let state = self.enter(Call::ListProducts(query.clone()), Endpoint::ListProducts)?;
        let mut matching: Vec<Product> = state
            .products
            .iter()
            .filter(|p| query.search.as_deref().is_none_or(|s| matches_search(p, s)))
            .filter(|p| query.active.is_none_or(|a| p.active == a))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.id.cmp(&a.id));

        let total = matching.len() as u64;
        let products = matching
            .into_iter()
            .skip(query.skip as usize)
            .take(query.limit as usize)
            .collect();
        Ok(ProductPage {
            products,
            total,
            skip: query.skip,
            limit: query.limit,
        })
    }

    async fn get_product(&self, id: ProductId) -> ConsoleResult<Product> {
        let state = self.enter(Call::GetProduct(id), Endpoint::GetProduct)?;
        state
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| not_found("Product"))
    }

    async fn create_product(&self, payload: &ProductPayload) -> ConsoleResult<Product> {
        let mut state = self.enter(Call::CreateProduct(payload.clone()), Endpoint::CreateProduct)?;
        if state.products.iter().any(|p| p.sku == payload.sku) {
            return Err(ConsoleError::api(
                400,
                Some(format!("Product with SKU '{}' already exists", payload.sku)),
            ));
        }
        state.next_id += 1;
        let product = Product {
            id: state.next_id,
            sku: payload.sku.clone(),
            name: payload.name.clone(),
            description: payload.description.clone(),
            price: payload.price,
            active: payload.active,
            created_at: None,
            updated_at: None,
        };
        state.products.push(product.clone());
        Ok(product)
    }

    async fn update_product(&self, id: ProductId, payload: &ProductPayload) -> ConsoleResult<Product> {
        let mut state = self.enter(
            Call::UpdateProduct(id, payload.clone()),
            Endpoint::UpdateProduct,
        )?;
        let product = state
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found("Product"))?;
        product.sku = payload.sku.clone();
        product.name = payload.name.clone();
        product.description = payload.description.clone();
        product.price = payload.price;
        product.active = payload.active;
        Ok(product.clone())
    }

    async fn delete_product(&self, id: ProductId) -> ConsoleResult<()> {
        let mut state = self.enter(Call::DeleteProduct(id), Endpoint::DeleteProduct)?;
        let before = state.products.len();
        state.products.retain(|p| p.id != id);
        if state.products.len() == before {
            return Err(not_found("Product"));
        }
        Ok(())
    }

    async fn delete_all_products(&self) -> ConsoleResult<BulkDeleteResult> {
        let mut state = self.enter(Call::DeleteAllProducts, Endpoint::DeleteAllProducts)?;
        let deleted = state.products.len() as u64;
        state.products.clear();
        Ok(BulkDeleteResult {
            deleted,
            message: Some(format!("Successfully deleted {} products", deleted)),
        })
    }

    async fn list_webhooks(&self) -> ConsoleResult<Vec<Webhook>> {
        let state = self.enter(Call::ListWebhooks, Endpoint::ListWebhooks)?;
        Ok(state.webhooks.clone())
    }

    async fn get_webhook(&self, id: WebhookId) -> ConsoleResult<Webhook> {
        let state = self.enter(Call::GetWebhook(id), Endpoint::GetWebhook)?;
        state
            .webhooks
            .iter()
            .find(|w| w.id == id)
            .cloned()
            .ok_or_else(|| not_found("Webhook"))
    }

    async fn create_webhook(&self, payload: &WebhookPayload) -> ConsoleResult<Webhook> {
        let mut state = self.enter(Call::CreateWebhook(payload.clone()), Endpoint::CreateWebhook)?;
        state.next_id += 1;
        let webhook = Webhook {
            id: state.next_id,
            url: payload.url.clone(),
            event_type: payload.event_type.clone(),
            enabled: payload.enabled,
            created_at: None,
            updated_at: None,
        };
        state.webhooks.push(webhook.clone());
        Ok(webhook)
    }

    async fn update_webhook(&self, id: WebhookId, payload: &WebhookPayload) -> ConsoleResult<Webhook> {
        let mut state = self.enter(
            Call::UpdateWebhook(id, payload.clone()),
            Endpoint::UpdateWebhook,
        )?;
        let webhook = state
            .webhooks
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| not_found("Webhook"))?;
        webhook.url = payload.url.clone();
        webhook.event_type = payload.event_type.clone();
        webhook.enabled = payload.enabled;
        Ok(webhook.clone())
    }

    async fn delete_webhook(&self, id: WebhookId) -> ConsoleResult<()> {
        let mut state = self.enter(Call::DeleteWebhook(id), Endpoint::DeleteWebhook)?;
        let before = state.webhooks.len();
        state.webhooks.retain(|w| w.id != id);
        if state.webhooks.len() == before {
            return Err(not_found("Webhook"));
        }
        Ok(())
    }

    async fn test_webhook(&self, id: WebhookId) -> ConsoleResult<WebhookTestResult> {
        let state = self.enter(Call::TestWebhook(id), Endpoint::TestWebhook)?;
        if !state.webhooks.iter().any(|w| w.id == id) {
            return Err(not_found("Webhook"));
        }
        Ok(state.test_result.clone().unwrap_or(WebhookTestResult {
            success: true,
            status_code: Some(200),
            response_time: Some(0.45),
            error: None,
        }))
    }
}
