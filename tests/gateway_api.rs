//! Black-box tests for the HTTP gateway.
//!
//! Drives the real router in-process with `tower::ServiceExt::oneshot`; no
//! socket is bound. Each test seeds its own registry with the standard demo
//! accounts (Mark=100, Jane=50, Adam=0).

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use money_transfer::account::Registry;
use money_transfer::gateway::{self, AppState};

fn seeded_router() -> Router {
    let registry = Arc::new(Registry::new());
    registry.create("Mark", 10_000).unwrap();
    registry.create("Jane", 5_000).unwrap();
    registry.create("Adam", 0).unwrap();
    gateway::router(Arc::new(AppState::new(registry)))
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_check() {
    let router = seeded_router();
    let (status, body) = get(&router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_accounts() {
    let router = seeded_router();
    let (status, body) = get(&router, "/accounts").await;

    assert_eq!(status, StatusCode::OK);
    let accounts = body.as_array().unwrap();
    assert_eq!(accounts.len(), 3);
    // Listing is ordered by username
    let names: Vec<&str> = accounts
        .iter()
        .map(|a| a["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Adam", "Jane", "Mark"]);
}

#[tokio::test]
async fn test_get_account() {
    let router = seeded_router();
    let (status, body) = get(&router, "/accounts/Mark").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "Mark");
    assert_eq!(body["balance"], json!(100.0));
}

#[tokio::test]
async fn test_get_unknown_account_is_404() {
    let router = seeded_router();
    let (status, body) = get(&router, "/accounts/Nobody").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ACCOUNT_NOT_FOUND");
}

#[tokio::test]
async fn test_transfer_success() {
    let router = seeded_router();
    let (status, body) = post_json(
        &router,
        "/transfer",
        json!({"from": "Mark", "to": "Jane", "amount": 25}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["from"]["balance"], json!(75.0));
    assert_eq!(body["to"]["balance"], json!(75.0));

    // The mutation is visible on subsequent reads
    let (_, mark) = get(&router, "/accounts/Mark").await;
    assert_eq!(mark["balance"], json!(75.0));
}

#[tokio::test]
async fn test_transfer_insufficient_funds() {
    let router = seeded_router();
    let (status, body) = post_json(
        &router,
        "/transfer",
        json!({"from": "Adam", "to": "Jane", "amount": 50}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "insufficient funds");
    assert!(body.get("from").is_none());

    // Balances unchanged
    let (_, adam) = get(&router, "/accounts/Adam").await;
    let (_, jane) = get(&router, "/accounts/Jane").await;
    assert_eq!(adam["balance"], json!(0.0));
    assert_eq!(jane["balance"], json!(50.0));
}

#[tokio::test]
async fn test_transfer_invalid_amount() {
    let router = seeded_router();
    let (status, body) = post_json(
        &router,
        "/transfer",
        json!({"from": "Mark", "to": "Jane", "amount": -25}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid amount, must be positive");
}

#[tokio::test]
async fn test_transfer_to_self_rejected() {
    let router = seeded_router();
    let (status, body) = post_json(
        &router,
        "/transfer",
        json!({"from": "Mark", "to": "Mark", "amount": 10}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "cannot transfer to the same account");
}

#[tokio::test]
async fn test_transfer_unknown_source() {
    let router = seeded_router();
    let (status, body) = post_json(
        &router,
        "/transfer",
        json!({"from": "Nobody", "to": "Jane", "amount": 10}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Source account not found");
}

#[tokio::test]
async fn test_create_account() {
    let router = seeded_router();
    let (status, body) = post_json(
        &router,
        "/accounts",
        json!({"username": "Eve", "balance": 12.5}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["username"], "Eve");
    assert_eq!(body["balance"], json!(12.5));

    // The new account participates in transfers
    let (status, body) = post_json(
        &router,
        "/transfer",
        json!({"from": "Eve", "to": "Adam", "amount": 2.5}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["from"]["balance"], json!(10.0));
}

#[tokio::test]
async fn test_create_duplicate_account_is_409() {
    let router = seeded_router();
    let (status, body) = post_json(
        &router,
        "/accounts",
        json!({"username": "Mark", "balance": 1}),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "ACCOUNT_EXISTS");
}

#[tokio::test]
async fn test_create_account_with_negative_balance_is_400() {
    let router = seeded_router();
    let (status, body) = post_json(
        &router,
        "/accounts",
        json!({"username": "Eve", "balance": -1}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_AMOUNT");
}
