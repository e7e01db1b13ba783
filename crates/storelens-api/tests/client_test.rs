//! Integration tests for the catalog client using wiremock.

#![allow(clippy::unwrap_used)]

use serde_json::json;
use storelens_api::{CatalogClient, Error};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, CatalogClient) {
    let server = MockServer::start().await;
    let client = CatalogClient::new(&server.uri()).unwrap();
    (server, client)
}

fn product_json(id: u64, title: &str, price: f64, category: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "price": price,
        "description": format!("{title}, fixture copy"),
        "category": category,
        "image": format!("https://img.example/{id}.jpg"),
        "rating": { "rate": 3.9, "count": 120 }
    })
}

#[tokio::test]
async fn list_products_decodes_the_catalog() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            product_json(1, "Fjallraven Backpack", 109.95, "men's clothing"),
            product_json(2, "Gold Chain Bracelet", 168.0, "jewelery"),
        ])))
        .mount(&server)
        .await;

    let products = client.list_products().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].title, "Fjallraven Backpack");
    assert_eq!(products[1].category, "jewelery");
    assert_eq!(products[1].rating.count, 120);
}

#[tokio::test]
async fn list_categories_decodes_plain_strings() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            "electronics",
            "jewelery",
            "men's clothing",
            "women's clothing",
        ])))
        .mount(&server)
        .await;

    let categories = client.list_categories().await.unwrap();
    assert_eq!(categories.len(), 4);
    assert_eq!(categories[0], "electronics");
}

#[tokio::test]
async fn base_url_with_trailing_slash_joins_cleanly() {
    let server = MockServer::start().await;
    let client = CatalogClient::new(&format!("{}/", server.uri())).unwrap();

    Mock::given(method("GET"))
        .and(path("/products/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["electronics"])))
        .mount(&server)
        .await;

    let categories = client.list_categories().await.unwrap();
    assert_eq!(categories, vec!["electronics".to_owned()]);
}

#[tokio::test]
async fn server_error_surfaces_status_and_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = client.list_products().await.unwrap_err();
    match err {
        Error::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn not_found_surfaces_as_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products/categories"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.list_categories().await.unwrap_err();
    assert!(matches!(err, Error::Status { status: 404, .. }));
}

#[tokio::test]
async fn html_body_maps_to_deserialization() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html>definitely not json</html>"),
        )
        .mount(&server)
        .await;

    let err = client.list_products().await.unwrap_err();
    assert!(matches!(err, Error::Deserialization { .. }));
}

#[tokio::test]
async fn missing_fields_map_to_deserialization() {
    let (server, client) = setup().await;

    // `title` and friends are required; a bare id must not decode.
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1 }])))
        .mount(&server)
        .await;

    let err = client.list_products().await.unwrap_err();
    match err {
        Error::Deserialization { message, .. } => {
            assert!(message.contains("body preview"), "message: {message}");
        }
        other => panic!("expected Deserialization error, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_refused_maps_to_transport() {
    // Grab a port that was live, then drop the server so nothing
    // listens there anymore. Use an unpooled server: pooled servers
    // from `MockServer::start()` keep the port bound after drop.
    let server = MockServer::builder().start().await;
    let uri = server.uri();
    drop(server);

    let client = CatalogClient::new(&uri).unwrap();
    let err = client.list_products().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(err.is_connection());
}

#[test]
fn unparsable_base_url_is_rejected_up_front() {
    let err = CatalogClient::new("not a url").unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}
