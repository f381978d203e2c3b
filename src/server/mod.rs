//! HTTP server layer for the content catalog.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │     /api/books  /api/images  /api/search  /api/content/...      │
//! │                                                                 │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────────┐  │
//! │  │  handlers   │  │    auth     │  │        routes           │  │
//! │  │ (requests)  │  │ (identity)  │  │  (router config, CORS)  │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod handlers;
pub mod routes;

pub use auth::{AuthError, BasicAuthUser, Identity, PLACEHOLDER_TOKEN};
pub use handlers::{
    books_handler, content_handler, health_handler, images_handler, login_handler,
    movies_handler, search_handler, AppState, ContentPathParams, ErrorResponse, HealthResponse,
    LoginRequest, LoginResponse, SearchQueryParams,
};
pub use routes::{create_router, RouterConfig};
