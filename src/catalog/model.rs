//! Catalog record types.
//!
//! Each record mirrors one table row. The JSON shape uses camelCase keys; the
//! cover URL goes out as `imageUrl`, which is the key existing clients read,
//! and is also accepted as `coverImageUrl`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Group name used for images that have no folder.
pub const ALL_GROUP: &str = "ALL";

/// A book row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(rename = "imageUrl", alias = "coverImageUrl")]
    pub cover_image_url: Option<String>,
    /// Path of the book file, relative to the storage root
    pub file_path: String,
}

/// A movie row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub director: String,
    #[serde(rename = "imageUrl", alias = "coverImageUrl")]
    pub cover_image_url: Option<String>,
    /// Path of the movie file, relative to the storage root
    pub file_path: String,
    pub genre: String,
}

/// An image row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: i64,
    pub name: String,
    /// Path of the image file, relative to the storage root
    pub file_path: String,
    /// Grouping folder; `None` or blank means the image belongs to [`ALL_GROUP`]
    pub folder: Option<String>,
}

impl Image {
    /// The group this image is listed under.
    pub fn group(&self) -> &str {
        match self.folder.as_deref() {
            Some(folder) if !folder.trim().is_empty() => folder,
            _ => ALL_GROUP,
        }
    }
}

/// A book that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub cover_image_url: Option<String>,
    pub file_path: String,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        cover_image_url: impl Into<String>,
        file_path: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            cover_image_url: Some(cover_image_url.into()),
            file_path: file_path.into(),
        }
    }
}

/// A movie that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub director: String,
    pub cover_image_url: Option<String>,
    pub file_path: String,
    pub genre: String,
}

impl NewMovie {
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        cover_image_url: impl Into<String>,
        file_path: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            cover_image_url: Some(cover_image_url.into()),
            file_path: file_path.into(),
            genre: genre.into(),
        }
    }
}

/// An image that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewImage {
    pub name: String,
    pub file_path: String,
    pub folder: Option<String>,
}

impl NewImage {
    pub fn new(
        name: impl Into<String>,
        file_path: impl Into<String>,
        folder: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            file_path: file_path.into(),
            folder: folder.map(str::to_string),
        }
    }
}
