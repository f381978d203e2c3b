//! Catalog store layer.
//!
//! The catalog holds three independent tables (books, movies, images). Every
//! row points at a file under the storage root through its `file_path`.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             ContentService              │
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │          CatalogStore Trait             │
//! │  (list, substring search, folder match) │
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │             SqliteCatalog               │
//! │      (sqlx pool, file or in-memory)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use content_catalog::catalog::{CatalogStore, SqliteCatalog};
//!
//! let catalog = SqliteCatalog::open(Path::new("backend/catalog.db")).await?;
//! let books = catalog.find_books_by_title_containing("gatsby").await?;
//! ```

mod model;
mod sqlite;
mod store;

pub use model::{Book, Image, Movie, NewBook, NewImage, NewMovie, ALL_GROUP};
pub use sqlite::{SqliteCatalog, DEFAULT_MAX_CONNECTIONS};
pub use store::CatalogStore;
