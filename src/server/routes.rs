//! Router configuration for the catalog server.
//!
//! This module defines the HTTP routes and applies middleware for CORS and
//! request tracing.
//!
//! # Route Structure
//!
//! ```text
//! /health                               - Health check (public)
//! /api/auth/login                       - Login (public)
//! /api/books                            - List books (public)
//! /api/movies                           - List movies (public)
//! /api/images                           - Images grouped by folder (public)
//! /api/search?query=                    - Search (public)
//! /api/content/{type}/{filename}        - File download (public)
//! /api/**                               - Anything else (Basic auth, then 404)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use content_catalog::server::{create_router, AppState, RouterConfig};
//!
//! let state = AppState::new(content_service, identity);
//! let router = create_router(state, RouterConfig::new());
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{
    books_handler, content_handler, health_handler, images_handler, login_handler,
    movies_handler, protected_fallback_handler, search_handler, AppState,
};
use crate::catalog::CatalogStore;

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Allowed CORS origins (None = allow any origin)
    pub cors_origins: Option<Vec<String>>,

    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RouterConfig {
    /// Create a router configuration.
    ///
    /// By default:
    /// - CORS allows any origin, method and header
    /// - Tracing is enabled
    pub fn new() -> Self {
        Self {
            cors_origins: None,
            enable_tracing: true,
        }
    }

    /// Set specific allowed CORS origins.
    ///
    /// Pass an empty vec to disallow all cross-origin requests.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Allow any CORS origin.
    pub fn with_cors_any_origin(mut self) -> Self {
        self.cors_origins = None;
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// Builds:
/// - The public `/api` routes
/// - A Basic-auth guarded fallback for every other `/api/**` path
/// - The `/health` route
/// - CORS and (optionally) request tracing
pub fn create_router<S>(state: AppState<S>, config: RouterConfig) -> Router
where
    S: CatalogStore + 'static,
{
    let api_routes = Router::new()
        .route("/auth/login", post(login_handler::<S>))
        .route("/books", get(books_handler::<S>))
        .route("/movies", get(movies_handler::<S>))
        .route("/images", get(images_handler::<S>))
        .route("/search", get(search_handler::<S>))
        .route("/content/{kind}/{filename}", get(content_handler::<S>))
        .fallback(protected_fallback_handler)
        .with_state(state);

    let router = Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_handler))
        .layer(build_cors_layer(&config));

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Build the CORS layer based on configuration.
fn build_cors_layer(config: &RouterConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(86400)); // 24 hours

    match &config.cors_origins {
        None => cors.allow_origin(Any),
        Some(origins) if origins.is_empty() => cors,
        Some(origins) => {
            let parsed_origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            cors.allow_origin(parsed_origins)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
