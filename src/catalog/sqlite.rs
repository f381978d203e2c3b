//! SQLite-backed catalog store.
//!
//! Tables are created on open. Substring searches fold case with Unicode rules
//! in Rust, since SQLite's `LIKE` and `lower()` only fold ASCII letters.

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::debug;

use crate::error::StoreError;

use super::model::{Book, Image, Movie, NewBook, NewImage, NewMovie};
use super::store::CatalogStore;

/// Default maximum number of pooled connections for a file database.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const BOOK_COLUMNS: &str = "id, title, author, cover_image_url, file_path";
const MOVIE_COLUMNS: &str = "id, title, director, cover_image_url, file_path, genre";
const IMAGE_COLUMNS: &str = "id, name, file_path, folder";

/// Catalog store over an SQLite connection pool.
#[derive(Debug, Clone)]
pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    /// Open (or create) a database file and make sure the schema exists.
    pub async fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::InvalidLocation {
                    path: path.to_path_buf(),
                    message: format!("failed to create parent directory: {e}"),
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(DEFAULT_MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        let catalog = Self { pool };
        catalog.migrate().await?;
        debug!(path = %path.display(), "Opened catalog database");
        Ok(catalog)
    }

    /// Create a private in-memory database.
    ///
    /// Uses a single connection that is never recycled, since every SQLite
    /// memory connection owns a separate database.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let catalog = Self { pool };
        catalog.migrate().await?;
        Ok(catalog)
    }

    /// The underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the catalog tables if they do not exist.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        let statements = [
            (
                "books",
                r#"
                CREATE TABLE IF NOT EXISTS books (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    title TEXT NOT NULL,
                    author TEXT NOT NULL,
                    cover_image_url TEXT,
                    file_path TEXT NOT NULL CHECK (file_path <> '')
                )
                "#,
            ),
            (
                "movies",
                r#"
                CREATE TABLE IF NOT EXISTS movies (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    title TEXT NOT NULL,
                    director TEXT NOT NULL,
                    cover_image_url TEXT,
                    file_path TEXT NOT NULL CHECK (file_path <> ''),
                    genre TEXT NOT NULL
                )
                "#,
            ),
            (
                "images",
                r#"
                CREATE TABLE IF NOT EXISTS images (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL,
                    file_path TEXT NOT NULL CHECK (file_path <> ''),
                    folder TEXT
                )
                "#,
            ),
        ];

        for (table, statement) in statements {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| StoreError::Migration {
                    message: format!("failed to create {table} table: {e}"),
                })?;
        }

        Ok(())
    }

    async fn count(&self, table: &'static str) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

/// Case-insensitive literal substring test; `needle` is already lowercased.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

#[async_trait]
impl CatalogStore for SqliteCatalog {
    async fn list_books(&self) -> Result<Vec<Book>, StoreError> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        let movies = sqlx::query_as::<_, Movie>(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(movies)
    }

    async fn list_images(&self) -> Result<Vec<Image>, StoreError> {
        let images = sqlx::query_as::<_, Image>(&format!(
            "SELECT {IMAGE_COLUMNS} FROM images ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(images)
    }

    async fn find_books_by_title_containing(&self, query: &str) -> Result<Vec<Book>, StoreError> {
        let needle = query.to_lowercase();
        let mut books = self.list_books().await?;
        books.retain(|b| contains_folded(&b.title, &needle));
        Ok(books)
    }

    async fn find_movies_by_title_containing(
        &self,
        query: &str,
    ) -> Result<Vec<Movie>, StoreError> {
        let needle = query.to_lowercase();
        let mut movies = self.list_movies().await?;
        movies.retain(|m| contains_folded(&m.title, &needle));
        Ok(movies)
    }

    async fn find_images_by_name_containing(
        &self,
        query: &str,
    ) -> Result<Vec<Image>, StoreError> {
        let needle = query.to_lowercase();
        let mut images = self.list_images().await?;
        images.retain(|i| contains_folded(&i.name, &needle));
        Ok(images)
    }

    async fn find_images_by_folder(&self, folder: &str) -> Result<Vec<Image>, StoreError> {
        let images = sqlx::query_as::<_, Image>(&format!(
            "SELECT {IMAGE_COLUMNS} FROM images WHERE folder = ?1 ORDER BY id"
        ))
        .bind(folder)
        .fetch_all(&self.pool)
        .await?;
        Ok(images)
    }

    async fn find_images_with_no_folder(&self) -> Result<Vec<Image>, StoreError> {
        let images = sqlx::query_as::<_, Image>(&format!(
            "SELECT {IMAGE_COLUMNS} FROM images WHERE folder IS NULL ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(images)
    }

    async fn count_books(&self) -> Result<i64, StoreError> {
        self.count("books").await
    }

    async fn count_movies(&self) -> Result<i64, StoreError> {
        self.count("movies").await
    }

    async fn count_images(&self) -> Result<i64, StoreError> {
        self.count("images").await
    }

    async fn insert_book(&self, book: &NewBook) -> Result<Book, StoreError> {
        let stored = sqlx::query_as::<_, Book>(&format!(
            "INSERT INTO books (title, author, cover_image_url, file_path) \
             VALUES (?1, ?2, ?3, ?4) RETURNING {BOOK_COLUMNS}"
        ))
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.cover_image_url)
        .bind(&book.file_path)
        .fetch_one(&self.pool)
        .await?;
        Ok(stored)
    }

    async fn insert_movie(&self, movie: &NewMovie) -> Result<Movie, StoreError> {
        let stored = sqlx::query_as::<_, Movie>(&format!(
            "INSERT INTO movies (title, director, cover_image_url, file_path, genre) \
             VALUES (?1, ?2, ?3, ?4, ?5) RETURNING {MOVIE_COLUMNS}"
        ))
        .bind(&movie.title)
        .bind(&movie.director)
        .bind(&movie.cover_image_url)
        .bind(&movie.file_path)
        .bind(&movie.genre)
        .fetch_one(&self.pool)
        .await?;
        Ok(stored)
    }

    async fn insert_image(&self, image: &NewImage) -> Result<Image, StoreError> {
        let stored = sqlx::query_as::<_, Image>(&format!(
            "INSERT INTO images (name, file_path, folder) \
             VALUES (?1, ?2, ?3) RETURNING {IMAGE_COLUMNS}"
        ))
        .bind(&image.name)
        .bind(&image.file_path)
        .bind(&image.folder)
        .fetch_one(&self.pool)
        .await?;
        Ok(stored)
    }
}
