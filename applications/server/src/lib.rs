//! Sleeve Server Library
//!
//! Album page server: the creation form, the JSON API, and host-based
//! routing of `<name>.<domain>` to published album pages.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod pages;
pub mod router;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::{ServerConfig, SiteSettings};
pub use error::{Result, ServerError};
pub use router::create_router;
pub use services::AlbumService;
pub use state::AppState;
