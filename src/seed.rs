//! First-run bootstrap.
//!
//! Creates the storage tree, empty placeholder files, and placeholder catalog
//! rows. Directories and files are only created when missing; rows are only
//! inserted into tables that are empty. Running it again is a no-op.
//!
//! Must finish before the server accepts requests and must not run
//! concurrently with itself against the same store.

use std::io::ErrorKind;

use tracing::{debug, info};

use crate::catalog::{CatalogStore, NewBook, NewImage, NewMovie};
use crate::content::{StorageLayout, BOOKS_DIR, IMAGES_DIR, MOVIES_DIR};
use crate::error::SeedError;

/// Image sub-folder created by the seed.
pub const SEED_IMAGE_FOLDER: &str = "folderA";

/// Placeholder files, relative to the storage root.
pub const PLACEHOLDER_FILES: [&str; 8] = [
    "books/book1.pdf",
    "books/book2.txt",
    "movies/movie1.mp4",
    "movies/movie2.mkv",
    "images/image1.jpg",
    "images/image2.png",
    "images/folderA/imageA1.jpg",
    "images/folderA/imageA2.gif",
];

/// What a seed run created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub files_created: usize,
    pub books_inserted: usize,
    pub movies_inserted: usize,
    pub images_inserted: usize,
}

impl SeedReport {
    /// Whether the run changed nothing.
    pub fn is_noop(&self) -> bool {
        *self == SeedReport::default()
    }
}

fn seed_books() -> Vec<NewBook> {
    vec![
        NewBook::new(
            "The Great Gatsby",
            "F. Scott Fitzgerald",
            "https://example.com/gatsby.jpg",
            "books/book1.pdf",
        ),
        NewBook::new(
            "To Kill a Mockingbird",
            "Harper Lee",
            "https://example.com/mockingbird.jpg",
            "books/book2.txt",
        ),
    ]
}

fn seed_movies() -> Vec<NewMovie> {
    vec![
        NewMovie::new(
            "Inception",
            "Christopher Nolan",
            "https://example.com/inception.jpg",
            "movies/movie1.mp4",
            "Sci-Fi",
        ),
        NewMovie::new(
            "The Shawshank Redemption",
            "Frank Darabont",
            "https://example.com/shawshank.jpg",
            "movies/movie2.mkv",
            "Drama",
        ),
    ]
}

fn seed_images() -> Vec<NewImage> {
    vec![
        NewImage::new("Default Image 1", "images/image1.jpg", None),
        NewImage::new("Default Image 2", "images/image2.png", Some("")),
        NewImage::new(
            "Folder A Image 1",
            "images/folderA/imageA1.jpg",
            Some(SEED_IMAGE_FOLDER),
        ),
        NewImage::new(
            "Folder A Image 2",
            "images/folderA/imageA2.gif",
            Some(SEED_IMAGE_FOLDER),
        ),
    ]
}

/// Run the seed against `store` and the tree under `layout`.
pub async fn seed<S>(store: &S, layout: &StorageLayout) -> Result<SeedReport, SeedError>
where
    S: CatalogStore + ?Sized,
{
    let mut report = SeedReport::default();

    let dirs = [
        layout.dir(BOOKS_DIR),
        layout.dir(MOVIES_DIR),
        layout.dir(IMAGES_DIR),
        layout.dir(IMAGES_DIR).join(SEED_IMAGE_FOLDER),
    ];
    for dir in &dirs {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| SeedError::io(dir, e))?;
    }
    debug!(root = %layout.root().display(), "Storage directories ready");

    for relative in PLACEHOLDER_FILES {
        let path = layout.root().join(relative);
        // create_new never truncates an existing file
        match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(_) => {
                debug!(path = %path.display(), "Created placeholder file");
                report.files_created += 1;
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(e) => return Err(SeedError::io(path, e)),
        }
    }

    if store.count_books().await? == 0 {
        for book in seed_books() {
            store.insert_book(&book).await?;
            report.books_inserted += 1;
        }
    }

    if store.count_movies().await? == 0 {
        for movie in seed_movies() {
            store.insert_movie(&movie).await?;
            report.movies_inserted += 1;
        }
    }

    if store.count_images().await? == 0 {
        for image in seed_images() {
            store.insert_image(&image).await?;
            report.images_inserted += 1;
        }
    }

    info!(
        files = report.files_created,
        books = report.books_inserted,
        movies = report.movies_inserted,
        images = report.images_inserted,
        "Seed complete"
    );

    Ok(report)
}
