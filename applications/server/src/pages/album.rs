//! Public album page: `GET /album/:name`, reached from `<name>.<domain>`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use maud::{html, Markup};
use sleeve_core::AlbumRecord;

use super::components::{html_response, is_safe_url, page_shell};
use crate::config::SiteSettings;
use crate::state::AppState;

/// Look the album up and render it, or the not-found page.
///
/// A failed lookup renders the same not-found page with 503.
pub async fn album_page(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match state.albums.get_album_by_subdomain(&name).await {
        Ok(Some(album)) => html_response(StatusCode::OK, render_album(&album, &state.site)),
        Ok(None) => {
            tracing::debug!(subdomain = %name, "Album not found");
            html_response(StatusCode::NOT_FOUND, render_not_found(&state.site))
        }
        Err(e) => {
            tracing::error!(subdomain = %name, error = %e, "Album lookup failed");
            html_response(
                StatusCode::SERVICE_UNAVAILABLE,
                render_not_found(&state.site),
            )
        }
    }
}

pub fn render_album(album: &AlbumRecord, site: &SiteSettings) -> Markup {
    let title = format!("{} by {}", album.album_name, album.artist_name);
    let services = album.streaming_links.available();

    let body = html! {
        header class="topbar" {
            a href=(site.home_url()) { "← Create your own album page" }
            span class="address" { (site.public_host(&album.subdomain)) }
        }
        main {
            div class="album" {
                div {
                    @if is_safe_url(&album.cover_url) {
                        img class="album-cover" src=(album.cover_url) alt=(title);
                    }
                }
                div {
                    h1 class="album-title" { (album.album_name) }
                    p class="album-artist" { (album.artist_name) }

                    @if !services.is_empty() {
                        section class="listen" {
                            h2 { "Listen Now" }
                            @for (service, url) in &services {
                                @if is_safe_url(url) {
                                    a class={"service service-" (service.key())}
                                        href=(url) target="_blank" rel="noopener noreferrer" {
                                        span { (service.display_name()) }
                                        span { "↗" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    page_shell(
        &title,
        &format!("Listen to {}", title),
        Some(&album.cover_url),
        body,
    )
}

pub fn render_not_found(site: &SiteSettings) -> Markup {
    let body = html! {
        main class="empty" {
            h1 { "Album Not Found" }
            p { "The album page you're looking for doesn't exist." }
            a class="button" href=(site.home_url()) { "Create Your Album Page" }
        }
    };

    page_shell("Album Not Found", "This album page does not exist.", None, body)
}
