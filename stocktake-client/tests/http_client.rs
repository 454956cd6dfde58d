// stocktake-client/tests/http_client.rs
// Integration tests against an in-process axum backend

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use shared::{Product, ProductUpdate};
use stocktake_client::{ClientConfig, ClientError, HttpInventoryClient, InventoryApi};

fn sample_product(id: &str, sku: &str, stock: i64) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        description: String::new(),
        sku: sku.to_string(),
        current_stock: stock,
        image_url: String::new(),
        category: "Beverage".to_string(),
        reporting_category: None,
    }
}

async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_fetch_inventory() {
    let app = Router::new().route(
        "/inventory",
        get(|| async { Json(vec![sample_product("p1", "SKU-001", 45)]) }),
    );
    let base_url = spawn_backend(app).await;

    let client = HttpInventoryClient::new(&ClientConfig::new(base_url)).unwrap();
    let catalog = client.fetch_inventory().await.unwrap();

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].sku, "SKU-001");
    assert_eq!(catalog[0].current_stock, 45);
}

#[tokio::test]
async fn test_update_stock_returns_authoritative_record() {
    let app = Router::new().route(
        "/product/{sku}",
        put(
            |Path(sku): Path<String>, Json(update): Json<ProductUpdate>| async move {
                let mut record = sample_product("p1", &sku, 0);
                record.current_stock = update.current_stock.unwrap_or(0);
                Json(record)
            },
        ),
    );
    let base_url = spawn_backend(app).await;

    let client = HttpInventoryClient::new(&ClientConfig::new(base_url)).unwrap();
    let record = client
        .update_stock("SKU-001", &ProductUpdate::stock(12))
        .await
        .unwrap();

    assert_eq!(record.sku, "SKU-001");
    assert_eq!(record.current_stock, 12);
}

#[tokio::test]
async fn test_non_success_status_maps_to_api_error() {
    let app = Router::new().route(
        "/inventory",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "backend exploded") }),
    );
    let base_url = spawn_backend(app).await;

    let client = HttpInventoryClient::new(&ClientConfig::new(base_url)).unwrap();
    let err = client.fetch_inventory().await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "backend exploded");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_maps_to_serialization_error() {
    let app = Router::new().route("/inventory", get(|| async { "not json" }));
    let base_url = spawn_backend(app).await;

    let client = HttpInventoryClient::new(&ClientConfig::new(base_url)).unwrap();
    let err = client.fetch_inventory().await.unwrap_err();

    assert!(matches!(err, ClientError::Serialization(_)));
}

#[tokio::test]
async fn test_base_url_trailing_slash_is_normalized() {
    let client = HttpInventoryClient::new(&ClientConfig::new("http://localhost:9999/")).unwrap();
    assert_eq!(client.base_url(), "http://localhost:9999");
}
