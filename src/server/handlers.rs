//! HTTP request handlers for the catalog API.
//!
//! # Endpoints
//!
//! - `POST /api/auth/login` - Check credentials, return the placeholder token
//! - `GET /api/books` - List books
//! - `GET /api/movies` - List movies
//! - `GET /api/images` - List images grouped by folder
//! - `GET /api/search?query=` - Substring search across all kinds
//! - `GET /api/content/{type}/{filename}` - Download a stored file
//! - `GET /health` - Health check endpoint

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tokio_util::io::ReaderStream;
use tracing::{debug, error, info};

use crate::catalog::{Book, CatalogStore, Image, Movie};
use crate::content::{ContentService, SearchHit};
use crate::error::{ContentError, StoreError};

use super::auth::{AuthError, BasicAuthUser, Identity, PLACEHOLDER_TOKEN};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state.
///
/// This is passed to all handlers via Axum's State extractor.
pub struct AppState<S: CatalogStore> {
    /// Catalog and storage access
    pub content: Arc<ContentService<S>>,

    /// The identity allowed to log in
    pub identity: Arc<Identity>,
}

impl<S: CatalogStore> AppState<S> {
    pub fn new(content: ContentService<S>, identity: Identity) -> Self {
        Self {
            content: Arc::new(content),
            identity: Arc::new(identity),
        }
    }
}

impl<S: CatalogStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            content: Arc::clone(&self.content),
            identity: Arc::clone(&self.identity),
        }
    }
}

// =============================================================================
// Request Parameters
// =============================================================================

/// Body of a login request.
///
/// Missing fields are treated as empty strings, which never authenticate.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

/// Query parameters for the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchQueryParams {
    /// Substring to look for (required; empty matches everything)
    pub query: String,
}

/// Path parameters for file downloads.
///
/// Extracted from: `/api/content/{kind}/{filename}`
#[derive(Debug, Deserialize)]
pub struct ContentPathParams {
    /// Content type directory (`books`, `movies`, `images`)
    pub kind: String,

    /// File name within that directory
    pub filename: String,
}

// =============================================================================
// Response Types
// =============================================================================

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error identifier or short message
    pub error: String,

    /// Human-readable detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// HTTP status code (included for convenience)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorResponse {
    /// An error body with only the `error` field.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
            status: None,
        }
    }

    /// An error body with a message and status code.
    pub fn with_status(
        error: impl Into<String>,
        message: impl Into<String>,
        status: StatusCode,
    ) -> Self {
        Self {
            error: error.into(),
            message: Some(message.into()),
            status: Some(status.as_u16()),
        }
    }
}

/// Successful login response.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Convert ContentError to HTTP response.
///
/// Missing files are a bare 404 with an empty body; store failures are a 500
/// with a JSON body and are logged at ERROR level.
impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        match self {
            ContentError::FileNotFound(path) => {
                debug!(
                    error_type = "not_found",
                    status = StatusCode::NOT_FOUND.as_u16(),
                    "File not found: {}",
                    path
                );
                StatusCode::NOT_FOUND.into_response()
            }
            ContentError::Store(err) => store_error_response(&err),
        }
    }
}

fn store_error_response(err: &StoreError) -> Response {
    let status = StatusCode::INTERNAL_SERVER_ERROR;
    let message = err.to_string();

    error!(
        error_type = "storage_error",
        status = status.as_u16(),
        "Server error: {}",
        message
    );

    let body = ErrorResponse::with_status("storage_error", message, status);
    (status, Json(body)).into_response()
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle login requests.
///
/// # Endpoint
///
/// `POST /api/auth/login`
///
/// # Response
///
/// - `200 OK`: `{"token": "dummy-jwt-token"}`
/// - `401 Unauthorized`: `{"error": "Invalid credentials"}`
pub async fn login_handler<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    let LoginRequest { username, password } = request;

    let authenticated = state
        .identity
        .authenticate_blocking(username.clone(), password)
        .await;

    if !authenticated {
        return Err(AuthError::InvalidCredentials);
    }

    info!(username = %username, "Login succeeded");
    Ok(Json(LoginResponse {
        token: PLACEHOLDER_TOKEN.to_string(),
    }))
}

/// Handle book list requests.
///
/// `GET /api/books` returns every book in store order.
pub async fn books_handler<S: CatalogStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Book>>, ContentError> {
    Ok(Json(state.content.list_books().await?))
}

/// Handle movie list requests.
///
/// `GET /api/movies` returns every movie in store order.
pub async fn movies_handler<S: CatalogStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Movie>>, ContentError> {
    Ok(Json(state.content.list_movies().await?))
}

/// Handle image list requests.
///
/// # Endpoint
///
/// `GET /api/images`
///
/// # Response
///
/// `200 OK` with a JSON object mapping folder name to images:
/// ```json
/// {
///   "ALL": [{"id": 1, "name": "Default Image 1", "filePath": "images/image1.jpg", "folder": null}],
///   "folderA": [{"id": 3, "name": "Folder A Image 1", "filePath": "images/folderA/imageA1.jpg", "folder": "folderA"}]
/// }
/// ```
pub async fn images_handler<S: CatalogStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<HashMap<String, Vec<Image>>>, ContentError> {
    Ok(Json(state.content.list_images_grouped_by_folder().await?))
}

/// Handle search requests.
///
/// # Endpoint
///
/// `GET /api/search?query={text}`
///
/// # Response
///
/// `200 OK` with books, then movies, then images:
/// ```json
/// [{"type": "movie", "data": {"id": 1, "title": "Inception", ...}}]
/// ```
///
/// A missing `query` parameter is rejected with `400 Bad Request`.
pub async fn search_handler<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<SearchQueryParams>,
) -> Result<Json<Vec<SearchHit>>, ContentError> {
    Ok(Json(state.content.search(&params.query).await?))
}

/// Handle file download requests.
///
/// # Endpoint
///
/// `GET /api/content/{type}/{filename}`
///
/// # Response
///
/// - `200 OK`: file bytes, `Content-Type` inferred from the extension
///   (`application/octet-stream` when unknown)
/// - `404 Not Found`: empty body when the file is missing, unreadable, or
///   outside the storage root
pub async fn content_handler<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(params): Path<ContentPathParams>,
) -> Result<Response, ContentError> {
    let resolved = state
        .content
        .resolve_file(&params.kind, &params.filename)
        .await?;

    debug!(
        path = %resolved.path.display(),
        media_type = %resolved.media_type,
        len = resolved.len,
        "Serving file"
    );

    let headers = [
        (header::CONTENT_TYPE, resolved.media_type.clone()),
        (header::CONTENT_LENGTH, resolved.len.to_string()),
    ];
    let body = Body::from_stream(ReaderStream::new(resolved.into_file()));

    Ok((headers, body).into_response())
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Fallback for `/api/**` paths without a public route.
///
/// Requires Basic credentials; once authenticated the path still does not
/// exist, so the answer is `404 Not Found`.
pub async fn protected_fallback_handler(user: BasicAuthUser) -> StatusCode {
    debug!(username = %user.username, "No route for authenticated request");
    StatusCode::NOT_FOUND
}

// =============================================================================
// Tests
// =============================================================================
