//! Integration tests for [`CatalogClient`] against a `wiremock` server.
//!
//! Covers envelope parsing, the product conversion boundary, and the
//! error mapping for 404, 429, non-success statuses, and bad payloads.

use rust_decimal::Decimal;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use product_table_core::{CategoryId, ProductId, VariantId};
use product_table_server::bigcommerce::{BigCommerceError, CatalogClient, ProductQuery};
use product_table_server::config::BigCommerceConfig;

const STORE_HASH: &str = "testhash";
const ACCESS_TOKEN: &str = "k9f2mq07ab31xzlc";

fn test_client(server: &MockServer) -> CatalogClient {
    let config = BigCommerceConfig {
        store_hash: STORE_HASH.to_string(),
        access_token: secrecy::SecretString::from(ACCESS_TOKEN),
        api_base: server.uri(),
    };
    CatalogClient::new(&config).expect("failed to build test CatalogClient")
}

fn catalog_product() -> serde_json::Value {
    json!({
        "id": 1,
        "name": "Trail Shoe",
        "sku": "TS-1",
        "price": 89.95,
        "sale_price": 0,
        "calculated_price": 89.95,
        "categories": [23, 24],
        "custom_url": {"url": "/trail-shoe/"},
        "images": [
            {"url_thumbnail": "https://cdn.example/a.jpg", "is_thumbnail": false},
            {"url_thumbnail": "https://cdn.example/b.jpg", "is_thumbnail": true}
        ],
        "variants": [{
            "id": 101,
            "sku": "TS-1-S",
            "price": null,
            "sale_price": null,
            "calculated_price": 89.95,
            "purchasing_disabled": false,
            "option_values": [{"option_display_name": "Size", "label": "Small"}]
        }]
    })
}

// ---- Test 1 – product page parses the v3 envelope and converts ----

#[tokio::test]
async fn get_products_parses_envelope_and_converts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/stores/{STORE_HASH}/v3/catalog/products")))
        .and(header("X-Auth-Token", ACCESS_TOKEN))
        .and(query_param("include", "variants"))
        .and(query_param("categories:in", "23"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "data": [catalog_product()],
            "meta": {"pagination": {"current_page": 1, "total_pages": 4}}
        })))
        .mount(&server)
        .await;

    let query = ProductQuery {
        category: Some(CategoryId::new(23)),
        page: None,
        limit: None,
    };
    let page = test_client(&server)
        .get_products(&query)
        .await
        .expect("request should succeed");

    assert_eq!(page.products.len(), 1);
    let product = &page.products[0];
    assert_eq!(product.id, ProductId::new(1));
    assert_eq!(product.price, Decimal::new(8995, 2));
    // Zero sale price on the wire means no sale price.
    assert_eq!(product.sale_price, None);
    assert_eq!(product.thumbnail_url.as_deref(), Some("https://cdn.example/b.jpg"));
    assert_eq!(product.variants[0].id, VariantId::new(101));
    assert_eq!(product.variants[0].price, None);
    assert_eq!(page.pagination.map(|p| p.total_pages), Some(4));
}

// ---- Test 2 – missing product maps to NotFound ----

#[tokio::test]
async fn get_product_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/stores/{STORE_HASH}/v3/catalog/products/99")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let error = test_client(&server)
        .get_product(ProductId::new(99))
        .await
        .expect_err("404 should be an error");

    assert!(matches!(error, BigCommerceError::NotFound(_)), "got {error:?}");
}

// ---- Test 3 – 429 surfaces the reset header in seconds ----

#[tokio::test]
async fn rate_limit_reports_retry_after_seconds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/stores/{STORE_HASH}/v2/store")))
        .respond_with(
            ResponseTemplate::new(429).insert_header("X-Rate-Limit-Time-Reset-Ms", "15000"),
        )
        .mount(&server)
        .await;

    let error = test_client(&server)
        .store_information()
        .await
        .expect_err("429 should be an error");

    assert!(matches!(error, BigCommerceError::RateLimited(15)), "got {error:?}");
}

// ---- Test 4 – non-success status carries a truncated body ----

#[tokio::test]
async fn server_error_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/stores/{STORE_HASH}/v3/catalog/categories")))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let error = test_client(&server)
        .get_categories(1, 250)
        .await
        .expect_err("503 should be an error");

    match error {
        BigCommerceError::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "upstream down");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

// ---- Test 5 – malformed payload maps to Parse ----

#[tokio::test]
async fn malformed_body_maps_to_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/stores/{STORE_HASH}/v2/store")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let error = test_client(&server)
        .store_information()
        .await
        .expect_err("bad JSON should be an error");

    assert!(matches!(error, BigCommerceError::Parse(_)), "got {error:?}");
}

// ---- Test 6 – v2 store endpoint returns a bare object ----

#[tokio::test]
async fn store_information_parses_bare_object() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/stores/{STORE_HASH}/v2/store")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "name": "Trail Outfitters",
            "domain": "shop.trail.example",
            "status": "live"
        })))
        .mount(&server)
        .await;

    let info = test_client(&server)
        .store_information()
        .await
        .expect("request should succeed");

    assert_eq!(info.name, "Trail Outfitters");
    assert_eq!(info.domain, "shop.trail.example");
    assert_eq!(info.status.as_deref(), Some("live"));
}
