//! ApiClient against a mock catalog server

use catalog_client::ApiClient;
use catalog_core::{CatalogApi, ConsoleError, EventType, ProductPayload, ProductQuery, WebhookPayload};
use serde_json::json;
use wiremock::matchers::{
    body_json, body_string_contains, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn product_json(id: i64, sku: &str) -> serde_json::Value {
    json!({
        "id": id,
        "sku": sku,
        "name": "Widget",
        "description": null,
        "price": 9.99,
        "active": true,
        "created_at": "2024-05-01T10:00:00+00:00",
        "updated_at": null
    })
}

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(server.uri()).unwrap()
}

#[tokio::test]
async fn list_products_sends_only_set_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("skip", "50"))
        .and(query_param("limit", "50"))
        .and(query_param("search", "widget"))
        .and(query_param_is_missing("active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 51,
            "skip": 50,
            "limit": 50,
            "products": [product_json(1, "A1")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let query = ProductQuery::page(1, 50).with_search("widget");
    let page = client.list_products(&query).await.unwrap();

    assert_eq!(page.total, 51);
    assert_eq!(page.products.len(), 1);
    assert_eq!(page.products[0].sku, "A1");
}

#[tokio::test]
async fn list_products_with_active_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("active", "false"))
        .and(query_param_is_missing("search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 0,
            "products": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let query = ProductQuery::page(0, 50).with_active(Some(false));
    let page = client.list_products(&query).await.unwrap();
    assert!(page.products.is_empty());
}

#[tokio::test]
async fn create_product_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/products"))
        .and(body_json(json!({
            "sku": "A1",
            "name": "Widget",
            "description": null,
            "price": 9.99,
            "active": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(product_json(12, "A1")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let payload = ProductPayload {
        sku: "A1".into(),
        name: "Widget".into(),
        description: None,
        price: 9.99,
        active: true,
    };
    let product = client.create_product(&payload).await.unwrap();
    assert_eq!(product.id, 12);
}

#[tokio::test]
async fn update_product_puts_to_record() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/products/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json(7, "B2")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let payload = ProductPayload {
        sku: "B2".into(),
        name: "Widget".into(),
        description: Some("Blue".into()),
        price: 1.0,
        active: false,
    };
    let product = client.update_product(7, &payload).await.unwrap();
    assert_eq!(product.sku, "B2");
}

#[tokio::test]
async fn server_detail_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/products"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"detail": "Product with SKU 'A1' already exists"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let payload = ProductPayload {
        sku: "A1".into(),
        name: "Widget".into(),
        description: None,
        price: 9.99,
        active: true,
    };
    let err = client.create_product(&payload).await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.detail(), Some("Product with SKU 'A1' already exists"));
    assert_eq!(
        err.user_message("Operation failed"),
        "Product with SKU 'A1' already exists"
    );
}

#[tokio::test]
async fn delete_product_accepts_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/products/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client.delete_product(7).await.unwrap();
}

#[tokio::test]
async fn delete_missing_product_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/products/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Product not found"})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.delete_product(99).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn delete_all_reports_count() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "deleted": 42,
            "message": "Successfully deleted 42 products"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.delete_all_products().await.unwrap();
    assert_eq!(result.deleted, 42);
}

#[tokio::test]
async fn upload_sends_multipart_file_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"products.csv\""))
        .and(body_string_contains("sku,name,price"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "task_id": "0b6f",
            "filename": "products.csv",
            "message": "Upload started. Use task_id to track progress."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let receipt = client
        .upload_csv("products.csv", b"sku,name,price\nA1,Widget,9.99\n".to_vec())
        .await
        .unwrap();
    assert_eq!(receipt.task_id, "0b6f");
}

#[tokio::test]
async fn upload_status_is_fetched_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/upload/0b6f/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "0b6f",
            "filename": "products.csv",
            "status": "completed",
            "progress": 100,
            "total_rows": 2,
            "processed_rows": 2,
            "error_message": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let task = client.upload_status("0b6f").await.unwrap();
    assert!(task.status.is_finished());
    assert_eq!(task.progress, 100);
}

#[tokio::test]
async fn webhook_crud_and_test() {
    let server = MockServer::start().await;
    let webhook = json!({
        "id": 3,
        "url": "https://hooks.example.com/catalog",
        "event_type": "product_created",
        "enabled": true,
        "created_at": null,
        "updated_at": null
    });

    Mock::given(method("GET"))
        .and(path("/api/webhooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([webhook.clone()])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/webhooks"))
        .and(body_json(json!({
            "url": "https://hooks.example.com/catalog",
            "event_type": "product_created",
            "enabled": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(webhook.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/webhooks/3/test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "status_code": 200,
            "response_time": 0.45
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;

    let hooks = client.list_webhooks().await.unwrap();
    assert_eq!(hooks.len(), 1);
    assert_eq!(hooks[0].event_type, EventType::ProductCreated);

    let created = client
        .create_webhook(&WebhookPayload {
            url: "https://hooks.example.com/catalog".into(),
            event_type: EventType::ProductCreated,
            enabled: true,
        })
        .await
        .unwrap();
    assert_eq!(created.id, 3);

    let result = client.test_webhook(3).await.unwrap();
    assert_eq!(result.summary(), "Webhook test successful! (200, 0.45s)");
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/webhooks"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.list_webhooks().await.unwrap_err();
    assert!(matches!(err, ConsoleError::Decode(_)));
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    // Port 9 (discard) is closed on test machines
    let client = ApiClient::new("http://127.0.0.1:9").unwrap();
    let err = client.list_webhooks().await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.user_message("Failed to load webhooks"), "Failed to load webhooks");
}
