//! Error types for the image host client.

use thiserror::Error;

/// Errors that can occur when uploading to the image host.
#[derive(Error, Debug)]
pub enum UploadError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Host is offline, unreachable, or timed out
    #[error("Image host unreachable: {0}")]
    Unreachable(String),

    /// Client configuration is unusable
    #[error("Invalid uploader configuration: {0}")]
    InvalidConfig(String),

    /// Host answered but refused the image
    #[error("Upload rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Failed to parse host response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Host reported success without a usable URL
    #[error("Image host response did not contain a URL")]
    MissingUrl,
}

/// Result type for upload operations.
pub type Result<T> = std::result::Result<T, UploadError>;

impl From<UploadError> for sleeve_core::SleeveError {
    fn from(err: UploadError) -> Self {
        sleeve_core::SleeveError::upload(err.to_string())
    }
}
