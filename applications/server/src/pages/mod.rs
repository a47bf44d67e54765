//! Server-rendered HTML pages.
//!
//! All rendering uses maud; every dynamic value is escaped.

pub mod album;
pub mod components;
pub mod home;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

use crate::state::AppState;

/// Fallback for unknown paths
pub async fn not_found(State(state): State<AppState>) -> Response {
    components::html_response(StatusCode::NOT_FOUND, album::render_not_found(&state.site))
}
