//! On-disk storage layout.
//!
//! Files live under a single root, partitioned by content type:
//!
//! ```text
//! {root}/books/...
//! {root}/movies/...
//! {root}/images/...          (with optional sub-folders)
//! ```
//!
//! Candidate paths are normalized lexically before any filesystem access, and
//! anything that normalizes to a location outside the root is refused.

use std::path::{Component, Path, PathBuf};

/// Directory holding book files.
pub const BOOKS_DIR: &str = "books";

/// Directory holding movie files.
pub const MOVIES_DIR: &str = "movies";

/// Directory holding image files.
pub const IMAGES_DIR: &str = "images";

/// Media type used when the extension is unknown.
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// The storage root and the rules for resolving paths beneath it.
#[derive(Debug, Clone)]
pub struct StorageLayout {
    root: PathBuf,
}

impl StorageLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: normalize(&root.into()),
        }
    }

    /// The normalized storage root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory for a content type (e.g. `books`).
    pub fn dir(&self, kind: &str) -> PathBuf {
        self.root.join(kind)
    }

    /// Join `kind` and `filename` under the root and normalize the result.
    ///
    /// Returns `None` when the normalized path is the root itself or escapes
    /// it. This is a lexical check only; symlinks are handled by the caller
    /// after canonicalization.
    pub fn candidate_path(&self, kind: &str, filename: &str) -> Option<PathBuf> {
        if kind.is_empty() || filename.is_empty() {
            return None;
        }

        let candidate = normalize(&self.root.join(kind).join(filename));
        if candidate != self.root && candidate.starts_with(&self.root) {
            Some(candidate)
        } else {
            None
        }
    }
}

/// Resolve `.` and `..` components without touching the filesystem.
///
/// A `..` that would climb above the start of a relative path is kept, so the
/// result never silently moves inside a different prefix.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Guess a media type from the file extension.
pub fn media_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first()
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_else(|| FALLBACK_MEDIA_TYPE.to_string())
}
