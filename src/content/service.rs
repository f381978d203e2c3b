//! Content service.
//!
//! Turns catalog rows into client-facing shapes and resolves download
//! requests to files under the storage root.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tokio::fs::File;
use tracing::debug;

use crate::catalog::{Book, CatalogStore, Image, Movie};
use crate::error::{ContentError, StoreError};

use super::storage::{media_type_for, StorageLayout};

// =============================================================================
// Search Results
// =============================================================================

/// One search result, tagged with its kind.
///
/// Serialized as `{"type": "book" | "movie" | "image", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum SearchHit {
    Book(Book),
    Movie(Movie),
    Image(Image),
}

// =============================================================================
// Resolved Files
// =============================================================================

/// A file that passed resolution and is open for reading.
#[derive(Debug)]
pub struct ResolvedFile {
    /// Canonical path of the file
    pub path: PathBuf,

    /// Media type inferred from the extension
    pub media_type: String,

    /// File length in bytes
    pub len: u64,

    file: File,
}

impl ResolvedFile {
    /// Take the open file handle, e.g. to stream it into a response body.
    pub fn into_file(self) -> File {
        self.file
    }
}

// =============================================================================
// Content Service
// =============================================================================

/// Read-only view over the catalog and the storage tree.
pub struct ContentService<S: CatalogStore> {
    store: Arc<S>,
    storage: StorageLayout,
}

impl<S: CatalogStore> ContentService<S> {
    pub fn new(store: S, storage: StorageLayout) -> Self {
        Self {
            store: Arc::new(store),
            storage,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn list_books(&self) -> Result<Vec<Book>, StoreError> {
        self.store.list_books().await
    }

    pub async fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        self.store.list_movies().await
    }

    /// All images keyed by folder, with folderless images under `"ALL"`.
    ///
    /// Store order is kept within each group.
    pub async fn list_images_grouped_by_folder(
        &self,
    ) -> Result<HashMap<String, Vec<Image>>, StoreError> {
        let images = self.store.list_images().await?;
        Ok(group_by_folder(images))
    }

    /// Books by title, then movies by title, then images by name.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>, StoreError> {
        let books = self.store.find_books_by_title_containing(query).await?;
        let movies = self.store.find_movies_by_title_containing(query).await?;
        let images = self.store.find_images_by_name_containing(query).await?;

        let mut hits = Vec::with_capacity(books.len() + movies.len() + images.len());
        hits.extend(books.into_iter().map(SearchHit::Book));
        hits.extend(movies.into_iter().map(SearchHit::Movie));
        hits.extend(images.into_iter().map(SearchHit::Image));

        debug!(query = query, hits = hits.len(), "Search completed");
        Ok(hits)
    }

    /// Resolve `{root}/{kind}/{filename}` to an open, readable regular file.
    ///
    /// Fails with [`ContentError::FileNotFound`] if the path escapes the
    /// storage root (lexically or through a symlink), does not exist, is not
    /// a regular file, or cannot be opened.
    pub async fn resolve_file(
        &self,
        kind: &str,
        filename: &str,
    ) -> Result<ResolvedFile, ContentError> {
        let not_found = || ContentError::FileNotFound(format!("{kind}/{filename}"));

        let candidate = self
            .storage
            .candidate_path(kind, filename)
            .ok_or_else(not_found)?;

        let root = tokio::fs::canonicalize(self.storage.root())
            .await
            .map_err(|_| not_found())?;
        let path = tokio::fs::canonicalize(&candidate)
            .await
            .map_err(|_| not_found())?;
        if !path.starts_with(&root) {
            return Err(not_found());
        }

        let metadata = tokio::fs::metadata(&path).await.map_err(|_| not_found())?;
        if !metadata.is_file() {
            return Err(not_found());
        }

        let file = File::open(&path).await.map_err(|_| not_found())?;

        Ok(ResolvedFile {
            media_type: media_type_for(&path),
            len: metadata.len(),
            path,
            file,
        })
    }
}

fn group_by_folder(images: Vec<Image>) -> HashMap<String, Vec<Image>> {
    let mut groups: HashMap<String, Vec<Image>> = HashMap::new();
    for image in images {
        groups
            .entry(image.group().to_string())
            .or_default()
            .push(image);
    }
    groups
}

// =============================================================================
// Tests
// =============================================================================
