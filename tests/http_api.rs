use reqwest::StatusCode;
use serde_json::{json, Value};

use product_service::api::{self, AppState};
use product_service::lifecycle::{seed_demo_catalog, ProductSystem};

/// Spawns the full service on an ephemeral port and returns its base URL.
///
/// Each test gets its own actor system, so collections and identity counters
/// are fully isolated between tests.
async fn spawn_server(seed: bool) -> (String, ProductSystem) {
    let system = ProductSystem::new();
    if seed {
        seed_demo_catalog(&system.repository)
            .await
            .expect("Failed to seed catalog");
    }

    let app = api::router(AppState {
        repository: system.repository.clone(),
    });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), system)
}

#[tokio::test]
async fn test_create_returns_201_with_assigned_id() {
    let (base, _system) = spawn_server(false).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/products"))
        .json(&json!({ "name": "Monitor", "quantity": 5, "price": 899.9 }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.unwrap();
    assert!(body["id"].is_u64());
    assert_eq!(body["name"], "Monitor");
    assert_eq!(body["quantity"].as_f64(), Some(5.0));
    assert_eq!(body["price"].as_f64(), Some(899.9));
}

#[tokio::test]
async fn test_create_with_missing_fields_returns_400() {
    let (base, _system) = spawn_server(false).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/products"))
        .json(&json!({ "name": "Teste" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Campos obrigatórios: name, quantity, price");
}

#[tokio::test]
async fn test_create_accepts_zero_values() {
    let (base, _system) = spawn_server(false).await;
    let client = reqwest::Client::new();

    // Zero is a legitimate supplied value, not a missing field.
    let resp = client
        .post(format!("{base}/products"))
        .json(&json!({ "name": "Brinde", "quantity": 0, "price": 0 }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["quantity"].as_f64(), Some(0.0));
    assert_eq!(body["price"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn test_fetch_seeded_product_by_id() {
    let (base, _system) = spawn_server(true).await;

    let resp = reqwest::get(format!("{base}/products/1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"].as_u64(), Some(1));
    assert_eq!(body["name"], "Notebook Dell");
    assert_eq!(body["quantity"].as_f64(), Some(10.0));
    assert_eq!(body["price"].as_f64(), Some(3500.0));
}

#[tokio::test]
async fn test_list_returns_seed_in_insertion_order() {
    let (base, _system) = spawn_server(true).await;

    let resp = reqwest::get(format!("{base}/products")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    let items = body.as_array().expect("Expected a JSON array");
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["name"], "Notebook Dell");
    assert_eq!(items[1]["name"], "Mouse Logitech");
    assert_eq!(items[2]["name"], "Teclado Mecânico");
}

#[tokio::test]
async fn test_partial_update_keeps_untouched_fields() {
    let (base, _system) = spawn_server(true).await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/products/2"))
        .json(&json!({ "price": 125.0 }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "Mouse Logitech");
    assert_eq!(body["quantity"].as_f64(), Some(25.0));
    assert_eq!(body["price"].as_f64(), Some(125.0));
}

#[tokio::test]
async fn test_update_with_null_field_leaves_it_untouched() {
    let (base, _system) = spawn_server(true).await;
    let client = reqwest::Client::new();

    // Explicit null means "absent", while 0 is a real value.
    let resp = client
        .put(format!("{base}/products/1"))
        .json(&json!({ "price": null, "quantity": 0 }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["price"].as_f64(), Some(3500.0));
    assert_eq!(body["quantity"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn test_empty_update_body_is_accepted() {
    let (base, _system) = spawn_server(true).await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/products/1"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "Notebook Dell");
}

#[tokio::test]
async fn test_delete_then_fetch_returns_404() {
    let (base, _system) = spawn_server(true).await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{base}/products/3"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(resp.bytes().await.unwrap().is_empty());

    let resp = reqwest::get(format!("{base}/products/3")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Produto não encontrado");
}

#[tokio::test]
async fn test_never_existing_id_returns_404_everywhere() {
    let (base, _system) = spawn_server(true).await;
    let client = reqwest::Client::new();

    let fetch = reqwest::get(format!("{base}/products/999")).await.unwrap();
    let update = client
        .put(format!("{base}/products/999"))
        .json(&json!({ "price": 1.0 }))
        .send()
        .await
        .unwrap();
    let delete = client
        .delete(format!("{base}/products/999"))
        .send()
        .await
        .unwrap();

    for resp in [fetch, update, delete] {
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "Produto não encontrado");
    }
}

#[tokio::test]
async fn test_non_numeric_id_segment_behaves_as_no_match() {
    let (base, _system) = spawn_server(true).await;

    let resp = reqwest::get(format!("{base}/products/abc")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Produto não encontrado");
}

#[tokio::test]
async fn test_ids_are_not_reused_over_http() {
    let (base, _system) = spawn_server(true).await;
    let client = reqwest::Client::new();

    client
        .delete(format!("{base}/products/3"))
        .send()
        .await
        .unwrap();

    let resp = client
        .post(format!("{base}/products"))
        .json(&json!({ "name": "Headset", "quantity": 8, "price": 250.0 }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"].as_u64(), Some(4));
}

#[tokio::test]
async fn test_malformed_body_returns_generic_500() {
    let (base, _system) = spawn_server(false).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/products"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Ocorreu um erro no servidor");
}

#[tokio::test]
async fn test_health_endpoint() {
    let (base, _system) = spawn_server(false).await;

    let resp = reqwest::get(format!("{base}/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "API rodando com sucesso!");
}
