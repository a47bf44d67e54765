/// Subdomain API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sleeve_core::subdomain;

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub subdomain: String,
    pub available: bool,
}

#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub album: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub subdomain: String,
}

/// GET /api/subdomains/:name/availability
///
/// Reserved labels are reported as unavailable without a store lookup.
pub async fn availability(
    Path(name): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<AvailabilityResponse>> {
    let name = subdomain::normalize(&name);
    if !subdomain::is_valid(&name) {
        return Err(ServerError::Validation(
            "Subdomain must contain at least one of a-z, 0-9 or -".to_string(),
        ));
    }

    let available = if app_state.hosts.is_reserved(&name) {
        false
    } else {
        app_state.albums.is_subdomain_available(&name).await?
    };

    Ok(Json(AvailabilityResponse {
        subdomain: name,
        available,
    }))
}

/// GET /api/subdomains/suggest
pub async fn suggest(Query(query): Query<SuggestQuery>) -> Json<SuggestResponse> {
    Json(SuggestResponse {
        subdomain: subdomain::suggest(&query.artist, &query.album),
    })
}
