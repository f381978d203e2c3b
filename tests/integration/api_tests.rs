//! API integration tests for catalog listing and search.
//!
//! Tests verify:
//! - Book and movie listings in store order with the camelCase JSON shape
//! - Image grouping under folders and the "ALL" group
//! - Search ordering, tagging and parameter validation
//! - Health check and CORS headers

use axum::body::Body;
use axum::http::{Request, StatusCode};

use content_catalog::RouterConfig;

use super::test_utils::{body_json, TestApp};

// =============================================================================
// Listings
// =============================================================================

#[tokio::test]
async fn test_list_books() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/books").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );

    let books = body_json(response).await;
    let books = books.as_array().unwrap();
    assert_eq!(books.len(), 2);

    assert_eq!(books[0]["title"], "The Great Gatsby");
    assert_eq!(books[0]["author"], "F. Scott Fitzgerald");
    assert_eq!(books[0]["imageUrl"], "https://example.com/gatsby.jpg");
    assert_eq!(books[0]["filePath"], "books/book1.pdf");
    assert!(books[0]["id"].is_i64());

    assert_eq!(books[1]["title"], "To Kill a Mockingbird");
}

#[tokio::test]
async fn test_list_movies() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/movies").await;
    assert_eq!(response.status(), StatusCode::OK);

    let movies = body_json(response).await;
    let titles: Vec<&str> = movies
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Inception", "The Shawshank Redemption"]);
    assert_eq!(movies[0]["director"], "Christopher Nolan");
    assert_eq!(movies[0]["genre"], "Sci-Fi");
    assert_eq!(movies[1]["filePath"], "movies/movie2.mkv");
}

#[tokio::test]
async fn test_images_grouped_by_folder() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/images").await;
    assert_eq!(response.status(), StatusCode::OK);

    let groups = body_json(response).await;
    let groups = groups.as_object().unwrap();
    assert_eq!(groups.len(), 2);

    // Both a null folder and an empty folder land in "ALL"
    let all = groups["ALL"].as_array().unwrap();
    let names: Vec<&str> = all.iter().map(|i| i["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Default Image 1", "Default Image 2"]);
    assert!(all[0]["folder"].is_null());
    assert_eq!(all[1]["folder"], "");

    let folder_a = groups["folderA"].as_array().unwrap();
    assert_eq!(folder_a.len(), 2);
    assert_eq!(folder_a[0]["filePath"], "images/folderA/imageA1.jpg");
    assert_eq!(folder_a[1]["filePath"], "images/folderA/imageA2.gif");
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/search?query=GATSBY").await;
    assert_eq!(response.status(), StatusCode::OK);

    let hits = body_json(response).await;
    let hits = hits.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["type"], "book");
    assert_eq!(hits[0]["data"]["title"], "The Great Gatsby");
}

#[tokio::test]
async fn test_search_orders_books_then_movies_then_images() {
    let app = TestApp::seeded().await;

    // "the" matches one book and one movie; "image" matches only image names
    let hits = body_json(app.get("/api/search?query=the").await).await;
    let kinds: Vec<&str> = hits
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["book", "movie"]);

    let hits = body_json(app.get("/api/search?query=image").await).await;
    let hits = hits.as_array().unwrap();
    assert_eq!(hits.len(), 4);
    assert!(hits.iter().all(|h| h["type"] == "image"));
}

#[tokio::test]
async fn test_search_matches_inner_substrings() {
    let app = TestApp::seeded().await;

    let hits = body_json(app.get("/api/search?query=ing").await).await;
    let kinds: Vec<&str> = hits
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["book"]);

    let hits = body_json(app.get("/api/search?query=ion").await).await;
    let titles: Vec<&str> = hits
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["data"]["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Inception", "The Shawshank Redemption"]);
}

#[tokio::test]
async fn test_search_no_match_is_empty_array() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/search?query=zzz-no-match").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_search_wildcards_are_literal() {
    let app = TestApp::seeded().await;

    let hits = body_json(app.get("/api/search?query=%25").await).await;
    assert_eq!(hits, serde_json::json!([]));

    let hits = body_json(app.get("/api/search?query=_").await).await;
    assert_eq!(hits, serde_json::json!([]));
}

#[tokio::test]
async fn test_search_empty_query_matches_everything() {
    let app = TestApp::seeded().await;

    let hits = body_json(app.get("/api/search?query=").await).await;
    assert_eq!(hits.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_search_missing_query_is_bad_request() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/search").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Health and CORS
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::seeded().await;

    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_cors_any_origin() {
    let app = TestApp::seeded().await;

    let request = Request::builder()
        .uri("/api/books")
        .header("origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = TestApp::seeded().await;

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/auth/login")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let methods = response
        .headers()
        .get("access-control-allow-methods")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("POST"));
}

#[tokio::test]
async fn test_cors_restricted_origin() {
    let config = RouterConfig::new()
        .with_cors_origins(vec!["https://catalog.example".to_string()])
        .with_tracing(false);
    let app = TestApp::seeded_with(config).await;

    let request = Request::builder()
        .uri("/api/books")
        .header("origin", "https://elsewhere.example")
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());

    let request = Request::builder()
        .uri("/api/books")
        .header("origin", "https://catalog.example")
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "https://catalog.example"
    );
}
