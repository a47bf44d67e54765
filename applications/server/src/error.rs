/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sleeve_core::SleeveError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Subdomain already taken: {0}")]
    SubdomainTaken(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Validation(_) | ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::SubdomainTaken(_) => StatusCode::CONFLICT,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::Upload(_) => StatusCode::BAD_GATEWAY,
            ServerError::Config(_) | ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the person who made the request
    pub fn user_message(&self) -> String {
        match self {
            ServerError::Validation(msg)
            | ServerError::BadRequest(msg)
            | ServerError::NotFound(msg) => msg.clone(),
            ServerError::SubdomainTaken(name) => {
                format!("The subdomain \"{}\" is already taken", name)
            }
            ServerError::StoreUnavailable(_) => {
                "Albums are temporarily unavailable, please try again".to_string()
            }
            ServerError::Upload(_) => "The cover image could not be uploaded".to_string(),
            ServerError::Config(_) => "Configuration error".to_string(),
            ServerError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl From<SleeveError> for ServerError {
    fn from(err: SleeveError) -> Self {
        match err {
            SleeveError::Validation(msg) => ServerError::Validation(msg),
            SleeveError::SubdomainTaken(name) => ServerError::SubdomainTaken(name),
            SleeveError::StoreUnavailable(msg) => ServerError::StoreUnavailable(msg),
            SleeveError::UploadFailed(msg) => ServerError::Upload(msg),
            e @ SleeveError::NotFound { .. } => ServerError::NotFound(e.to_string()),
            SleeveError::Serialization(e) => ServerError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ServerError::StoreUnavailable(msg) => tracing::error!("Store error: {}", msg),
            ServerError::Upload(msg) => tracing::error!("Upload error: {}", msg),
            ServerError::Config(msg) => tracing::error!("Config error: {}", msg),
            ServerError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            _ => {}
        }

        let body = Json(json!({
            "error": self.user_message(),
        }));

        (status, body).into_response()
    }
}
