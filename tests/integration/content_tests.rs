//! File download integration tests.
//!
//! Tests verify:
//! - Seeded placeholder files stream back with the right media type
//! - File bytes and Content-Length match what is on disk
//! - Missing files, directories and traversal attempts yield a bare 404

use axum::http::StatusCode;

use super::test_utils::{body_bytes, TestApp};

// =============================================================================
// Successful Downloads
// =============================================================================

#[tokio::test]
async fn test_download_seeded_placeholder() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/content/movies/movie1.mp4").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("content-type").unwrap(), "video/mp4");
    assert_eq!(response.headers().get("content-length").unwrap(), "0");
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_download_streams_file_contents() {
    let app = TestApp::seeded().await;
    let contents = b"%PDF-1.4 not really a pdf";
    app.write_file("books/book1.pdf", contents);

    let response = app.get("/api/content/books/book1.pdf").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/pdf"
    );
    assert_eq!(
        response.headers().get("content-length").unwrap(),
        &contents.len().to_string()
    );
    assert_eq!(body_bytes(response).await, contents);
}

#[tokio::test]
async fn test_media_types_by_extension() {
    let app = TestApp::seeded().await;

    for (uri, expected) in [
        ("/api/content/books/book2.txt", "text/plain"),
        ("/api/content/images/image1.jpg", "image/jpeg"),
        ("/api/content/images/image2.png", "image/png"),
    ] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            expected,
            "{uri}"
        );
    }
}

#[tokio::test]
async fn test_unknown_extension_is_octet_stream() {
    let app = TestApp::seeded().await;
    app.write_file("books/notes.zzqx", b"opaque");

    let response = app.get("/api/content/books/notes.zzqx").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/octet-stream"
    );
    assert_eq!(body_bytes(response).await, b"opaque");
}

// =============================================================================
// Not Found
// =============================================================================

#[tokio::test]
async fn test_missing_file_is_bare_not_found() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/content/movies/movie1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_unknown_content_type_directory() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/content/music/movie1.mp4").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_directory_is_not_a_file() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/content/images/folderA").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_encoded_traversal_rejected() {
    let app = TestApp::seeded().await;

    for uri in [
        "/api/content/books/..%2F..%2Fetc%2Fpasswd",
        "/api/content/..%2F..%2Fetc/passwd",
        "/api/content/%2E%2E/passwd",
        "/api/content/books/%2Fetc%2Fpasswd",
    ] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert!(body_bytes(response).await.is_empty(), "{uri}");
    }
}

#[tokio::test]
async fn test_nested_image_path_not_routed_as_single_segment() {
    let app = TestApp::seeded().await;

    // filename is a single path segment; nested folders are not addressable
    let response = app.get("/api/content/images/folderA/imageA1.jpg").await;
    assert_ne!(response.status(), StatusCode::OK);
}
