//! Catalog store abstraction.

use async_trait::async_trait;

use crate::error::StoreError;

use super::model::{Book, Image, Movie, NewBook, NewImage, NewMovie};

/// Read and seed access to the three catalog tables.
///
/// Listing methods return rows in insertion order. Substring searches are
/// case-insensitive and treat the query literally (no wildcards).
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All books.
    async fn list_books(&self) -> Result<Vec<Book>, StoreError>;

    /// All movies.
    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError>;

    /// All images.
    async fn list_images(&self) -> Result<Vec<Image>, StoreError>;

    /// Books whose title contains `query`.
    async fn find_books_by_title_containing(&self, query: &str) -> Result<Vec<Book>, StoreError>;

    /// Movies whose title contains `query`.
    async fn find_movies_by_title_containing(&self, query: &str)
        -> Result<Vec<Movie>, StoreError>;

    /// Images whose name contains `query`.
    async fn find_images_by_name_containing(&self, query: &str)
        -> Result<Vec<Image>, StoreError>;

    /// Images whose folder equals `folder` exactly.
    async fn find_images_by_folder(&self, folder: &str) -> Result<Vec<Image>, StoreError>;

    /// Images stored without a folder.
    async fn find_images_with_no_folder(&self) -> Result<Vec<Image>, StoreError>;

    async fn count_books(&self) -> Result<i64, StoreError>;

    async fn count_movies(&self) -> Result<i64, StoreError>;

    async fn count_images(&self) -> Result<i64, StoreError>;

    /// Insert a book and return it with its assigned id.
    async fn insert_book(&self, book: &NewBook) -> Result<Book, StoreError>;

    /// Insert a movie and return it with its assigned id.
    async fn insert_movie(&self, movie: &NewMovie) -> Result<Movie, StoreError>;

    /// Insert an image and return it with its assigned id.
    async fn insert_image(&self, image: &NewImage) -> Result<Image, StoreError>;
}
