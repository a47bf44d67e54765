//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response},
    Router,
};
use chrono::{Duration, Utc};
use sleeve_core::{
    AssetUploader, CoverImage, NewAlbumRecord, StreamingLinks, StreamingService, UploadedAsset,
};
use sleeve_server::{create_router, AlbumService, AppState, SiteSettings};
use sleeve_storage::SqliteAlbumStore;
use std::sync::Arc;
use tempfile::TempDir;

pub const DOMAIN: &str = "example.com";

/// Router over a real SQLite file plus a handle on the same store
pub struct TestApp {
    pub router: Router,
    pub store: Arc<SqliteAlbumStore>,
    _temp_dir: TempDir,
}

impl TestApp {
    /// App whose uploads always succeed
    pub async fn new() -> Self {
        Self::with_uploader(Arc::new(StaticUploader)).await
    }

    pub async fn with_uploader(uploader: Arc<dyn AssetUploader>) -> Self {
        let (store, temp_dir) = create_test_store().await;
        let albums = Arc::new(AlbumService::new(store.clone(), uploader));
        let router = create_router(AppState::new(albums, site()));

        Self {
            router,
            store,
            _temp_dir: temp_dir,
        }
    }
}

/// Create a store in a temporary directory with migrations applied
pub async fn create_test_store() -> (Arc<SqliteAlbumStore>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());
    let store = SqliteAlbumStore::open(&db_url).await.unwrap();
    (Arc::new(store), temp_dir)
}

pub fn site() -> SiteSettings {
    SiteSettings::for_domain(DOMAIN)
}

/// A stored-record fixture created `minutes_ago`
pub fn album_record(subdomain: &str, minutes_ago: i64) -> NewAlbumRecord {
    let created_at = Utc::now() - Duration::minutes(minutes_ago);
    let mut links = StreamingLinks::new();
    links.set(
        StreamingService::Spotify,
        format!("https://open.spotify.com/album/{}", subdomain),
    );

    NewAlbumRecord {
        subdomain: subdomain.to_string(),
        artist_name: format!("Artist {}", subdomain),
        album_name: format!("Album {}", subdomain),
        cover_url: format!("https://i.ibb.co/{}/cover.jpg", subdomain),
        streaming_links: links,
        created_at,
        updated_at: created_at,
    }
}

pub fn get(host: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::HOST, host)
        .body(Body::empty())
        .unwrap()
}

pub fn post_multipart(host: &str, uri: &str, form: &MultipartForm) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::HOST, host)
        .header(header::CONTENT_TYPE, form.content_type())
        .body(Body::from(form.body()))
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

/// Minimal multipart/form-data encoder
pub struct MultipartForm {
    boundary: &'static str,
    parts: Vec<u8>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self {
            boundary: "sleeve-test-boundary",
            parts: Vec::new(),
        }
    }

    /// A complete, valid submission for `subdomain`
    pub fn album(subdomain: &str) -> Self {
        Self::new()
            .text("artistName", "Daft Punk")
            .text("albumName", "Discovery")
            .text("subdomain", subdomain)
            .text("spotify", "https://open.spotify.com/album/2noRn2Aes5aoNVsU6iWThc")
            .file("cover", "discovery.jpg", "image/jpeg", b"\xff\xd8\xff fake jpeg")
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.parts.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                self.boundary, name, value
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.parts.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                self.boundary, name, file_name, content_type
            )
            .as_bytes(),
        );
        self.parts.extend_from_slice(bytes);
        self.parts.extend_from_slice(b"\r\n");
        self
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn body(&self) -> Vec<u8> {
        let mut body = self.parts.clone();
        body.extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        body
    }
}

/// Uploader that "hosts" every cover at a predictable URL
pub struct StaticUploader;

#[axum::async_trait]
impl AssetUploader for StaticUploader {
    async fn upload(&self, image: CoverImage) -> sleeve_core::Result<UploadedAsset> {
        Ok(UploadedAsset {
            url: format!("https://i.ibb.co/test/{}", image.file_name),
            delete_url: None,
        })
    }
}
