//! Authentication integration tests.
//!
//! Tests verify:
//! - Login with the provisioned identity returns the placeholder token
//! - Wrong or missing credentials are rejected with 401
//! - Unrouted `/api/**` paths demand Basic credentials before answering 404
//! - Catalog routes stay public

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

use content_catalog::server::auth::{DEFAULT_PASSWORD, DEFAULT_USERNAME};
use content_catalog::PLACEHOLDER_TOKEN;

use super::test_utils::{body_bytes, body_json, get_with_basic, post_json, TestApp};

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::seeded().await;

    let request = post_json(
        "/api/auth/login",
        json!({"username": DEFAULT_USERNAME, "password": DEFAULT_PASSWORD}),
    );
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body, json!({"token": PLACEHOLDER_TOKEN}));
    assert_eq!(body["token"], "dummy-jwt-token");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::seeded().await;

    let request = post_json(
        "/api/auth/login",
        json!({"username": DEFAULT_USERNAME, "password": "wrong"}),
    );
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Invalid credentials"})
    );
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = TestApp::seeded().await;

    let request = post_json(
        "/api/auth/login",
        json!({"username": "nobody", "password": DEFAULT_PASSWORD}),
    );
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::seeded().await;

    let response = app.send(post_json("/api/auth/login", json!({}))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_malformed_body_rejected() {
    let app = TestApp::seeded().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.send(request).await;
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_login_is_not_a_get_route() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/auth/login").await;
    assert!(response.status().is_client_error());
}

// =============================================================================
// Protected Fallback
// =============================================================================

#[tokio::test]
async fn test_unknown_api_path_requires_credentials() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/admin/users").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get("www-authenticate").unwrap(),
        "Basic realm=\"catalog\""
    );
    assert_eq!(body_json(response).await, json!({"error": "Unauthorized"}));
}

#[tokio::test]
async fn test_unknown_api_path_wrong_credentials() {
    let app = TestApp::seeded().await;

    let response = app
        .send(get_with_basic("/api/admin/users", DEFAULT_USERNAME, "wrong"))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_api_path_with_credentials_is_not_found() {
    let app = TestApp::seeded().await;

    let response = app
        .send(get_with_basic(
            "/api/admin/users",
            DEFAULT_USERNAME,
            DEFAULT_PASSWORD,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_placeholder_token_is_not_a_credential() {
    let app = TestApp::seeded().await;

    let request = Request::builder()
        .uri("/api/admin/users")
        .header("authorization", format!("Bearer {PLACEHOLDER_TOKEN}"))
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_catalog_routes_are_public() {
    let app = TestApp::seeded().await;

    for uri in [
        "/api/books",
        "/api/movies",
        "/api/images",
        "/api/search?query=a",
        "/api/content/books/book1.pdf",
    ] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri} should be public");
    }
}

#[tokio::test]
async fn test_paths_outside_api_are_not_guarded() {
    let app = TestApp::seeded().await;

    let response = app.get("/nowhere").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
