/// Page and host routing integration tests
/// Album pages are reached through `<name>.example.com`
mod common;

use axum::http::{header, StatusCode};
use common::{
    album_record, body_string, get, post_multipart, site, MultipartForm, StaticUploader, TestApp,
};
use sleeve_core::{AlbumStore, MockAlbumStore, SleeveError};
use sleeve_server::{create_router, AlbumService, AppState};
use std::sync::Arc;
use tower::util::ServiceExt;

const MAIN_HOST: &str = "www.example.com";

// ============================================================================
// Host routing
// ============================================================================

#[tokio::test]
async fn test_album_host_serves_album_page() {
    let app = TestApp::new().await;
    app.store.insert(album_record("daft-punk", 0)).await.unwrap();

    let response = app
        .router
        .oneshot(get("daft-punk.example.com", "/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/html; charset=utf-8"
    );

    let html = body_string(response).await;
    assert!(html.contains("Album daft-punk"));
    assert!(html.contains("Artist daft-punk"));
    assert!(html.contains("https://i.ibb.co/daft-punk/cover.jpg"));
    assert!(html.contains("service-spotify"));
}

#[tokio::test]
async fn test_main_host_serves_landing_page() {
    let app = TestApp::new().await;
    app.store.insert(album_record("daft-punk", 0)).await.unwrap();

    for host in [MAIN_HOST, "example.com", "localhost:8080", "127.0.0.1:8080"] {
        let response = app.router.clone().oneshot(get(host, "/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK, "host {}", host);
        let html = body_string(response).await;
        assert!(html.contains("action=\"/albums\""), "host {}", host);
        assert!(html.contains("Recently published"), "host {}", host);
    }
}

#[tokio::test]
async fn test_unknown_album_host_renders_not_found() {
    let app = TestApp::new().await;

    let response = app
        .router
        .oneshot(get("nobody-here.example.com", "/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_string(response).await;
    assert!(html.contains("Album Not Found"));
}

#[tokio::test]
async fn test_album_lookup_failure_is_service_unavailable() {
    let mut store = MockAlbumStore::new();
    store
        .expect_get_by_subdomain()
        .returning(|_| Err(SleeveError::store("database is locked")));

    let albums = Arc::new(AlbumService::new(Arc::new(store), Arc::new(StaticUploader)));
    let router = create_router(AppState::new(albums, site()));

    let response = router
        .oneshot(get("daft-punk.example.com", "/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let html = body_string(response).await;
    assert!(html.contains("Album Not Found"));
    assert!(!html.contains("database is locked"));
}

#[tokio::test]
async fn test_album_host_other_paths_are_not_rewritten() {
    let app = TestApp::new().await;
    app.store.insert(album_record("daft-punk", 0)).await.unwrap();

    let response = app
        .router
        .clone()
        .oneshot(get("daft-punk.example.com", "/favicon.ico"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .router
        .oneshot(get("daft-punk.example.com", "/api/health"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_duplicate_names_resolve_to_oldest_record() {
    let app = TestApp::new().await;

    let mut first = album_record("twins", 5);
    first.album_name = "First Pressing".into();
    let mut second = album_record("twins", 0);
    second.album_name = "Second Pressing".into();

    app.store.insert(first).await.unwrap();
    app.store.insert(second).await.unwrap();

    let response = app
        .router
        .oneshot(get("twins.example.com", "/"))
        .await
        .unwrap();

    let html = body_string(response).await;
    assert!(html.contains("First Pressing"));
    assert!(!html.contains("Second Pressing"));
}

// ============================================================================
// Creation form
// ============================================================================

#[tokio::test]
async fn test_form_publish_redirects_to_album_host() {
    let app = TestApp::new().await;

    let response = app
        .router
        .clone()
        .oneshot(post_multipart(
            MAIN_HOST,
            "/albums",
            &MultipartForm::album("Discovery!"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://discovery.example.com"
    );

    // The new page is immediately reachable
    let response = app
        .router
        .oneshot(get("discovery.example.com", "/"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Discovery"));
}

#[tokio::test]
async fn test_form_failure_preserves_fields() {
    let app = TestApp::new().await;

    let form = MultipartForm::new()
        .text("artistName", "Daft Punk")
        .text("albumName", "Homework")
        .text("subdomain", "homework")
        .text("bandcamp", "https://daftpunk.bandcamp.com");

    let response = app
        .router
        .oneshot(post_multipart(MAIN_HOST, "/albums", &form))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_string(response).await;
    assert!(html.contains("Cover image is required"));
    assert!(html.contains("value=\"Homework\""));
    assert!(html.contains("value=\"https://daftpunk.bandcamp.com\""));
    assert!(!app.store.exists("homework").await.unwrap());
}

#[tokio::test]
async fn test_form_taken_name_shows_notice() {
    let app = TestApp::new().await;
    app.store.insert(album_record("discovery", 0)).await.unwrap();

    let response = app
        .router
        .oneshot(post_multipart(
            MAIN_HOST,
            "/albums",
            &MultipartForm::album("discovery"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let html = body_string(response).await;
    assert!(html.contains("already taken"));
    assert_eq!(app.store.list_recent(10).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_form_reserved_name_is_rejected() {
    let app = TestApp::new().await;

    for name in ["www", "example"] {
        let response = app
            .router
            .clone()
            .oneshot(post_multipart(
                MAIN_HOST,
                "/albums",
                &MultipartForm::album(name),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", name);
        assert!(response.headers().get(header::LOCATION).is_none());
        let html = body_string(response).await;
        assert!(html.contains("is reserved"), "{}", name);
    }

    assert!(app.store.list_recent(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_form_generate_fills_subdomain() {
    let app = TestApp::new().await;

    let form = MultipartForm::new()
        .text("artistName", "Wu-Tang Clan")
        .text("albumName", "Enter the Wu-Tang (36 Chambers)")
        .text("subdomain", "")
        .text("action", "generate");

    let response = app
        .router
        .oneshot(post_multipart(MAIN_HOST, "/albums", &form))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("value=\"wutangclan-enterthewutang36cha\""));
    assert!(app.store.list_recent(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_form_check_reports_availability() {
    let app = TestApp::new().await;
    app.store.insert(album_record("taken", 0)).await.unwrap();

    let check = |name: &str| {
        MultipartForm::new()
            .text("subdomain", name)
            .text("action", "check")
    };

    let response = app
        .router
        .clone()
        .oneshot(post_multipart(MAIN_HOST, "/albums", &check("Free-Name")))
        .await
        .unwrap();
    let html = body_string(response).await;
    assert!(html.contains("free-name.example.com is available"));

    let response = app
        .router
        .clone()
        .oneshot(post_multipart(MAIN_HOST, "/albums", &check("taken")))
        .await
        .unwrap();
    let html = body_string(response).await;
    assert!(html.contains("taken.example.com is already taken"));

    let response = app
        .router
        .oneshot(post_multipart(MAIN_HOST, "/albums", &check("www")))
        .await
        .unwrap();
    let html = body_string(response).await;
    assert!(html.contains("www.example.com is reserved"));
}
