/// HTTP routing
use crate::{api, pages, state::AppState};
use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Multipart overhead allowed on top of the cover size
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the complete application.
///
/// Host rewriting wraps the route table so `<name>.<domain>/` is matched as
/// `/album/<name>`.
pub fn create_router(app_state: AppState) -> Router {
    let host_router = Arc::clone(&app_state.hosts);
    let body_limit = app_state.site.max_upload_bytes + FORM_OVERHEAD_BYTES;

    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/subdomains/suggest", get(api::subdomains::suggest))
        .route(
            "/subdomains/:name/availability",
            get(api::subdomains::availability),
        )
        .route("/albums", post(api::albums::create_album))
        .route("/albums/featured", get(api::albums::featured_albums))
        .route("/albums/:name", get(api::albums::get_album));

    let routes = Router::new()
        .route("/", get(pages::home::landing))
        .route("/albums", post(pages::home::submit_album))
        .route("/album/:name", get(pages::album::album_page))
        .nest("/api", api_routes)
        .fallback(pages::not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(app_state);

    let rewritten = ServiceBuilder::new()
        .map_request(move |request: Request<Body>| host_router.rewrite(request))
        .service(routes);

    Router::new()
        .fallback_service(rewritten)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
}
