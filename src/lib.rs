//! # Content Catalog
//!
//! A small catalog backend for books, movies and images.
//!
//! Metadata lives in SQLite; the files themselves live under a local storage
//! root, partitioned by content type. The HTTP API lists and searches the
//! catalog and streams files back with an inferred media type.
//!
//! ## Features
//!
//! - **Catalog listing**: books and movies in store order, images grouped by folder
//! - **Search**: case-insensitive substring search, tagged by kind
//! - **File download**: traversal-safe resolution under the storage root
//! - **Login check**: one bcrypt-hashed identity, placeholder token
//! - **Seed on startup**: idempotent creation of the tree and placeholder rows
//!
//! ## Architecture
//!
//! - [`catalog`] - Record types and the SQLite-backed [`CatalogStore`]
//! - [`content`] - [`ContentService`] and the on-disk [`StorageLayout`]
//! - [`seed`] - First-run bootstrap
//! - [`server`] - Axum handlers, auth and router
//! - [`config`] - CLI and configuration types
//!
//! ## Example
//!
//! ```rust,no_run
//! use content_catalog::{
//!     create_router, seed::seed, AppState, ContentService, Identity, RouterConfig,
//!     SqliteCatalog, StorageLayout,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = SqliteCatalog::open("backend/catalog.db".as_ref()).await?;
//!     let layout = StorageLayout::new("backend/storage");
//!     seed(&catalog, &layout).await?;
//!
//!     let identity = Identity::provision("siddharth", "Best#123", 12)?;
//!     let state = AppState::new(ContentService::new(catalog, layout), identity);
//!     let router = create_router(state, RouterConfig::new());
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//!     axum::serve(listener, router).await?;
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod seed;
pub mod server;

// Re-export commonly used types
pub use catalog::{
    Book, CatalogStore, Image, Movie, NewBook, NewImage, NewMovie, SqliteCatalog, ALL_GROUP,
};
pub use config::{Cli, Command, SeedConfig, ServeConfig, StorageArgs};
pub use content::{ContentService, ResolvedFile, SearchHit, StorageLayout};
pub use error::{ContentError, SeedError, StoreError};
pub use seed::{SeedReport, PLACEHOLDER_FILES};
pub use server::{
    create_router, AppState, AuthError, ErrorResponse, HealthResponse, Identity, LoginRequest,
    LoginResponse, RouterConfig, PLACEHOLDER_TOKEN,
};
