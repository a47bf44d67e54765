/// Core error types for Sleeve
use thiserror::Error;

/// Result type alias using `SleeveError`
pub type Result<T> = std::result::Result<T, SleeveError>;

/// Core error type for Sleeve
///
/// Every variant is scoped to a single request or interaction; none of them
/// is fatal to the process.
#[derive(Error, Debug)]
pub enum SleeveError {
    /// A required field is empty or a value is malformed
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The requested subdomain already belongs to a published album
    #[error("Subdomain already taken: {0}")]
    SubdomainTaken(String),

    /// The record store could not be reached or rejected the operation
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// The asset host did not accept the cover image
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    /// Entity not found (point update/delete only; lookups return `Option`)
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl SleeveError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a store-unavailable error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::StoreUnavailable(msg.into())
    }

    /// Create an upload failure
    pub fn upload(msg: impl Into<String>) -> Self {
        Self::UploadFailed(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Whether the error should be shown to the user as a form problem
    /// rather than a backend failure.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::SubdomainTaken(_))
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for SleeveError {
    fn from(err: sqlx::Error) -> Self {
        Self::StoreUnavailable(err.to_string())
    }
}
