//! Sleeve Core
//!
//! Backend-agnostic types, traits, and error handling for Sleeve album pages.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `AlbumRecord`, `StreamingLinks`, `CreateAlbum`, etc.
//! - **Name Validator**: the [`subdomain`] module normalizes user-chosen short names
//! - **Core Traits**: `AlbumStore` (record store) and `AssetUploader` (image host)
//! - **Error Handling**: Unified `SleeveError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use sleeve_core::subdomain;
//! use sleeve_core::types::{StreamingLinks, StreamingService};
//!
//! let name = subdomain::suggest("Daft Punk", "Discovery");
//! assert_eq!(name, "daftpunk-discovery");
//!
//! let mut links = StreamingLinks::new();
//! links.set(StreamingService::Bandcamp, "https://daftpunk.bandcamp.com");
//! assert_eq!(links.available().len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod subdomain;
pub mod types;
pub mod upload;

// Re-export commonly used types
pub use error::{Result, SleeveError};
pub use storage::AlbumStore;
pub use upload::{AssetUploader, CoverImage, UploadedAsset};

pub use types::{
    AlbumId, AlbumRecord, CreateAlbum, NewAlbumRecord, StreamingLinks, StreamingService,
    UpdateAlbum,
};

#[cfg(feature = "mocks")]
pub use storage::MockAlbumStore;
#[cfg(feature = "mocks")]
pub use upload::MockAssetUploader;
