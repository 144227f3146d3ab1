//! Core types used throughout Catalog Admin
//!
//! These mirror the JSON shapes served by the catalog REST API. The console
//! never owns this data: every list is a transient copy replaced wholesale on
//! the next fetch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Unique Identifiers
// ============================================================================

/// Server-assigned product identifier
pub type ProductId = i64;

/// Server-assigned webhook identifier
pub type WebhookId = i64;

// ============================================================================
// Timestamps
// ============================================================================

/// Lenient decoding for server timestamps.
///
/// Takes RFC 3339, or a date-time without an offset read as UTC (what
/// SQLite-backed servers emit). Anything else decodes as `None` instead of
/// failing the whole record.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    pub fn parse(value: &str) -> Option<DateTime<Utc>> {
        if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
            return Some(stamp.with_timezone(&Utc));
        }
        let naive = NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok());
        if naive.is_none() {
            tracing::debug!("Ignoring unparseable timestamp {:?}", value);
        }
        naive.map(|n| n.and_utc())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse))
    }
}

// ============================================================================
// Products
// ============================================================================

/// A product as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub active: bool,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Price formatted for display, e.g. `$9.99`
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Description for display, `-` when missing or empty
    pub fn display_description(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => "-",
        }
    }
}

/// Body of a product create/update request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub sku: String,
    pub name: String,
    /// Always serialised; `null` when the form field was blank
    pub description: Option<String>,
    pub price: f64,
    pub active: bool,
}

/// One page of the product listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

/// Response of the bulk delete endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkDeleteResult {
    pub deleted: u64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Query parameters for `GET /api/products`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductQuery {
    pub skip: u64,
    pub limit: u64,
    pub search: Option<String>,
    pub active: Option<bool>,
}

impl ProductQuery {
    /// Query for a zero-based page index of the given size
    pub fn page(page: u64, page_size: u64) -> Self {
        Self {
            skip: page * page_size,
            limit: page_size,
            search: None,
            active: None,
        }
    }

    /// Add a search filter; an empty string leaves the filter unset
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = if search.is_empty() { None } else { Some(search) };
        self
    }

    /// Add an active/inactive filter
    pub fn with_active(mut self, active: Option<bool>) -> Self {
        self.active = active;
        self
    }

    /// Encode as URL query pairs. Unset filters are omitted entirely.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("skip", self.skip.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(active) = self.active {
            pairs.push(("active", active.to_string()));
        }
        pairs
    }
}

// ============================================================================
// Webhooks
// ============================================================================

/// Event a webhook subscribes to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    ProductCreated,
    ProductUpdated,
    ProductDeleted,
    ProductsBulkDeleted,
    UploadComplete,
    /// An event name this console does not know about
    Other(String),
}

impl EventType {
    /// The selectable event types, in display order
    pub const ALL: [EventType; 5] = [
        EventType::ProductCreated,
        EventType::ProductUpdated,
        EventType::ProductDeleted,
        EventType::ProductsBulkDeleted,
        EventType::UploadComplete,
    ];

    /// Wire name of the event
    pub fn as_str(&self) -> &str {
        match self {
            EventType::ProductCreated => "product_created",
            EventType::ProductUpdated => "product_updated",
            EventType::ProductDeleted => "product_deleted",
            EventType::ProductsBulkDeleted => "products_bulk_deleted",
            EventType::UploadComplete => "upload_complete",
            EventType::Other(name) => name,
        }
    }

    /// Human readable label for selects
    pub fn display_name(&self) -> &str {
        match self {
            EventType::ProductCreated => "Product Created",
            EventType::ProductUpdated => "Product Updated",
            EventType::ProductDeleted => "Product Deleted",
            EventType::ProductsBulkDeleted => "Products Bulk Deleted",
            EventType::UploadComplete => "Upload Complete",
            EventType::Other(name) => name,
        }
    }
}

impl Default for EventType {
    fn default() -> Self {
        EventType::ProductCreated
    }
}

impl From<String> for EventType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "product_created" => EventType::ProductCreated,
            "product_updated" => EventType::ProductUpdated,
            "product_deleted" => EventType::ProductDeleted,
            "products_bulk_deleted" => EventType::ProductsBulkDeleted,
            "upload_complete" => EventType::UploadComplete,
            _ => EventType::Other(value),
        }
    }
}

impl From<&str> for EventType {
    fn from(value: &str) -> Self {
        EventType::from(value.to_string())
    }
}

impl From<EventType> for String {
    fn from(value: EventType) -> Self {
        match value {
            EventType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A webhook subscription as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    pub id: WebhookId,
    pub url: String,
    pub event_type: EventType,
    pub enabled: bool,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of a webhook create/update request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub url: String,
    pub event_type: EventType,
    pub enabled: bool,
}

/// Outcome of a test delivery fired by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookTestResult {
    pub success: bool,
    #[serde(default)]
    pub status_code: Option<u16>,
    /// Round trip in seconds
    #[serde(default)]
    pub response_time: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl WebhookTestResult {
    /// Notification text for this result
    pub fn summary(&self) -> String {
        if self.success {
            let status = self
                .status_code
                .map(|code| code.to_string())
                .unwrap_or_else(|| "?".to_string());
            let elapsed = self.response_time.unwrap_or_default();
            format!("Webhook test successful! ({}, {:.2}s)", status, elapsed)
        } else {
            format!(
                "Webhook test failed: {}",
                self.error.as_deref().unwrap_or("unknown error")
            )
        }
    }
}

// ============================================================================
// Uploads
// ============================================================================

/// Response of `POST /api/upload`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub task_id: String,
    pub filename: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Server-side import status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl UploadStatus {
    /// Whether the import has stopped changing
    pub fn is_finished(&self) -> bool {
        matches!(self, UploadStatus::Completed | UploadStatus::Failed)
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UploadStatus::Pending => "pending",
            UploadStatus::Processing => "processing",
            UploadStatus::Completed => "completed",
            UploadStatus::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Snapshot of an import task from `GET /api/upload/{task_id}/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadTask {
    pub id: String,
    pub filename: String,
    pub status: UploadStatus,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub total_rows: u64,
    #[serde(default)]
    pub processed_rows: u64,
    #[serde(default)]
    pub error_message: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_timestamps_accept_offset_and_naive() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        assert_eq!(timestamp::parse("2024-05-01T10:00:00+00:00"), Some(expected));
        assert_eq!(timestamp::parse("2024-05-01T12:00:00+02:00"), Some(expected));
        assert_eq!(timestamp::parse("2024-05-01T10:00:00"), Some(expected));
        assert_eq!(timestamp::parse("2024-05-01 10:00:00"), Some(expected));
        assert_eq!(
            timestamp::parse("2024-05-01T10:00:00.250000"),
            Some(expected + chrono::Duration::milliseconds(250))
        );
        assert_eq!(timestamp::parse("yesterday"), None);
    }

    #[test]
    fn test_naive_timestamps_do_not_fail_records() {
        let product: Product = serde_json::from_str(
            r#"{"id":1,"sku":"A1","name":"Widget","price":1.0,"active":true,
                "created_at":"2024-05-01T10:00:00.123456","updated_at":"not a date"}"#,
        )
        .unwrap();
        assert!(product.created_at.is_some());
        assert_eq!(product.updated_at, None);

        let webhook: Webhook = serde_json::from_str(
            r#"{"id":2,"url":"https://a.example.com","event_type":"product_created",
                "enabled":true,"created_at":"2024-05-01T10:00:00","updated_at":null}"#,
        )
        .unwrap();
        assert_eq!(
            webhook.created_at,
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap())
        );
        assert_eq!(webhook.updated_at, None);

        // Missing fields still default
        let webhook: Webhook = serde_json::from_str(
            r#"{"id":3,"url":"https://b.example.com","event_type":"upload_complete","enabled":false}"#,
        )
        .unwrap();
        assert_eq!(webhook.created_at, None);
    }

    fn widget() -> Product {
        Product {
            id: 7,
            sku: "A1".into(),
            name: "Widget".into(),
            description: None,
            price: 9.5,
            active: true,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_product_display_helpers() {
        let mut product = widget();
        assert_eq!(product.display_price(), "$9.50");
        assert_eq!(product.display_description(), "-");

        product.description = Some(String::new());
        assert_eq!(product.display_description(), "-");

        product.description = Some("Blue".into());
        assert_eq!(product.display_description(), "Blue");
    }

    #[test]
    fn test_product_deserialize_from_server_shape() {
        let json = r#"{
            "id": 3,
            "sku": "SKU-3",
            "name": "Gadget",
            "description": null,
            "price": 12.0,
            "active": false,
            "created_at": "2024-05-01T10:00:00+00:00",
            "updated_at": null
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 3);
        assert!(!product.active);
        assert!(product.created_at.is_some());
        assert!(product.updated_at.is_none());
    }

    #[test]
    fn test_payload_serializes_null_description() {
        let payload = ProductPayload {
            sku: "A1".into(),
            name: "Widget".into(),
            description: None,
            price: 9.99,
            active: true,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "sku": "A1",
                "name": "Widget",
                "description": null,
                "price": 9.99,
                "active": true
            })
        );
    }

    #[test]
    fn test_query_omits_unset_filters() {
        let query = ProductQuery::page(0, 50);
        assert_eq!(
            query.to_query_pairs(),
            vec![("skip", "0".to_string()), ("limit", "50".to_string())]
        );

        let query = ProductQuery::page(2, 50).with_search("");
        assert_eq!(query.search, None);
        assert_eq!(query.to_query_pairs()[0], ("skip", "100".to_string()));
    }

    #[test]
    fn test_query_includes_filters_verbatim() {
        let query = ProductQuery::page(1, 25)
            .with_search(" blue Widget")
            .with_active(Some(false));
        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("skip", "25".to_string()),
                ("limit", "25".to_string()),
                ("search", " blue Widget".to_string()),
                ("active", "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_event_type_wire_names() {
        for event in EventType::ALL.iter() {
            let json = serde_json::to_string(event).unwrap();
            assert_eq!(json, format!("\"{}\"", event.as_str()));
        }

        let parsed: EventType = serde_json::from_str("\"upload_complete\"").unwrap();
        assert_eq!(parsed, EventType::UploadComplete);
    }

    #[test]
    fn test_event_type_unknown_is_preserved() {
        let parsed: EventType = serde_json::from_str("\"inventory_low\"").unwrap();
        assert_eq!(parsed, EventType::Other("inventory_low".into()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"inventory_low\"");
    }

    #[test]
    fn test_webhook_test_summary() {
        let ok = WebhookTestResult {
            success: true,
            status_code: Some(200),
            response_time: Some(0.45),
            error: None,
        };
        assert_eq!(ok.summary(), "Webhook test successful! (200, 0.45s)");

        let failed = WebhookTestResult {
            success: false,
            status_code: None,
            response_time: None,
            error: Some("Connection refused".into()),
        };
        assert_eq!(failed.summary(), "Webhook test failed: Connection refused");
    }

    #[test]
    fn test_upload_task_deserialize() {
        let json = r#"{
            "id": "abc",
            "filename": "products.csv",
            "status": "processing",
            "progress": 40,
            "total_rows": 1000,
            "processed_rows": 400,
            "error_message": null
        }"#;
        let task: UploadTask = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, UploadStatus::Processing);
        assert!(!task.status.is_finished());
        assert_eq!(task.processed_rows, 400);
    }
}
