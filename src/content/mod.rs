//! Content service layer.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              HTTP Handlers              │
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │             ContentService              │
//! │  ┌──────────────┐  ┌─────────────────┐  │
//! │  │ group/search │  │  resolve_file   │  │
//! │  │ (catalog)    │  │  (storage tree) │  │
//! │  └──────────────┘  └─────────────────┘  │
//! └─────────┬───────────────────┬───────────┘
//!           ▼                   ▼
//!    ┌──────────────┐   ┌───────────────┐
//!    │ CatalogStore │   │ StorageLayout │
//!    └──────────────┘   └───────────────┘
//! ```
//!
//! - [`ContentService`]: listing, grouping, search and file resolution
//! - [`SearchHit`]: kind-tagged search result
//! - [`ResolvedFile`]: an open file plus its inferred media type
//! - [`StorageLayout`]: storage root and traversal-safe path joining

mod service;
pub mod storage;

pub use service::{ContentService, ResolvedFile, SearchHit};
pub use storage::{
    media_type_for, StorageLayout, BOOKS_DIR, FALLBACK_MEDIA_TYPE, IMAGES_DIR, MOVIES_DIR,
};
