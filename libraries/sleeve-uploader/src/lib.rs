//! Sleeve Uploader
//!
//! HTTP client for the external image host that stores album covers.
//!
//! The host speaks the ImgBB upload protocol: one multipart `image` part
//! posted to `<endpoint>?key=<api key>`, answered with
//! `{"success": true, "data": {"url": ..., "delete_url": ...}}`.
//!
//! # Example
//!
//! ```ignore
//! use sleeve_core::{AssetUploader, CoverImage};
//! use sleeve_uploader::{ImgbbClient, ImgbbConfig};
//!
//! let client = ImgbbClient::new(ImgbbConfig::new("https://api.imgbb.com/1/upload", "key"))?;
//! let asset = client
//!     .upload(CoverImage::new("cover.jpg", "image/jpeg", bytes))
//!     .await?;
//! println!("Hosted at {}", asset.url);
//! ```

mod client;
mod error;
mod types;

pub use client::ImgbbClient;
pub use error::{Result, UploadError};
pub use types::{ImgbbConfig, DEFAULT_ENDPOINT};
