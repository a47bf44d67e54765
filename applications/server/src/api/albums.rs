/// Albums API routes
use crate::{
    api::forms::read_album_form,
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use sleeve_core::AlbumRecord;

/// Upper bound for `limit` on listing endpoints
pub const MAX_FEATURED_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub struct FeaturedQuery {
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct FeaturedResponse {
    pub albums: Vec<AlbumRecord>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
    pub subdomain: String,
    pub url: String,
}

/// POST /api/albums
/// Publish an album from a multipart submission
pub async fn create_album(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    let form = read_album_form(&headers, body).await?;
    let create = form.fields.validate(form.cover, &app_state.hosts)?;
    let subdomain = create.subdomain.clone();

    let id = app_state.albums.publish_album(create).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: id.to_string(),
            url: app_state.site.public_url(&subdomain),
            subdomain,
        }),
    ))
}

/// GET /api/albums/featured
pub async fn featured_albums(
    State(app_state): State<AppState>,
    Query(query): Query<FeaturedQuery>,
) -> Result<Json<FeaturedResponse>> {
    let limit = query
        .limit
        .unwrap_or(app_state.site.featured_limit)
        .min(MAX_FEATURED_LIMIT);

    let albums = app_state.albums.get_featured_albums(limit).await?;
    Ok(Json(FeaturedResponse { albums }))
}

/// GET /api/albums/:name
pub async fn get_album(
    Path(name): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<AlbumRecord>> {
    let album = app_state
        .albums
        .get_album_by_subdomain(&name)
        .await?
        .ok_or_else(|| ServerError::NotFound("Album not found".to_string()))?;
    Ok(Json(album))
}
