//! Landing page: the creation form plus recently published albums.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use bytes::Bytes;
use maud::{html, Markup};
use sleeve_core::{subdomain, AlbumRecord, StreamingService};

use super::components::{album_card, html_response, notice, page_shell, Notice};
use crate::api::forms::{read_album_form, AlbumFields, AlbumForm, FormAction};
use crate::config::SiteSettings;
use crate::error::ServerError;
use crate::state::AppState;

/// GET /
pub async fn landing(State(state): State<AppState>) -> Response {
    landing_response(&state, StatusCode::OK, &AlbumFields::default(), None).await
}

/// POST /albums
///
/// Publishes and redirects to the new page, or shows the form again with a
/// notice and the submitted values.
pub async fn submit_album(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let AlbumForm {
        mut fields,
        cover,
        action,
    } = match read_album_form(&headers, body).await {
        Ok(form) => form,
        Err(e) => {
            let notice = Notice::error(e.user_message());
            return landing_response(&state, e.status(), &AlbumFields::default(), Some(notice))
                .await;
        }
    };

    match action {
        FormAction::Generate => {
            let missing_names =
                fields.artist_name.trim().is_empty() || fields.album_name.trim().is_empty();
            let notice = if missing_names {
                Some(Notice::info("Enter the artist and album name first"))
            } else {
                fields.subdomain = subdomain::suggest(&fields.artist_name, &fields.album_name);
                None
            };
            landing_response(&state, StatusCode::OK, &fields, notice).await
        }
        FormAction::Check => {
            fields.subdomain = fields.normalized_subdomain();
            let notice = check_availability(&state, &fields.subdomain).await;
            landing_response(&state, StatusCode::OK, &fields, Some(notice)).await
        }
        FormAction::Publish => {
            let published = match fields.validate(cover, &state.hosts) {
                Ok(create) => {
                    let name = create.subdomain.clone();
                    state.albums.publish_album(create).await.map(|_| name)
                }
                Err(e) => Err(e),
            };

            match published {
                Ok(name) => Redirect::to(&state.site.public_url(&name)).into_response(),
                Err(e) => {
                    if !e.is_user_error() {
                        tracing::error!(error = %e, "Album submission failed");
                    }
                    let err = ServerError::from(e);
                    fields.subdomain = fields.normalized_subdomain();
                    let notice = Notice::error(err.user_message());
                    landing_response(&state, err.status(), &fields, Some(notice)).await
                }
            }
        }
    }
}

async fn check_availability(state: &AppState, name: &str) -> Notice {
    if !subdomain::is_valid(name) {
        return Notice::error("Enter a subdomain using a-z, 0-9 and -");
    }

    let host = state.site.public_host(name);
    if state.hosts.is_reserved(name) {
        return Notice::error(format!("{} is reserved", host));
    }

    match state.albums.is_subdomain_available(name).await {
        Ok(true) => Notice::success(format!("{} is available", host)),
        Ok(false) => Notice::error(format!("{} is already taken", host)),
        Err(e) => {
            tracing::error!(subdomain = %name, error = %e, "Availability check failed");
            Notice::error(ServerError::from(e).user_message())
        }
    }
}

async fn landing_response(
    state: &AppState,
    status: StatusCode,
    fields: &AlbumFields,
    notice: Option<Notice>,
) -> Response {
    let featured = match state
        .albums
        .get_featured_albums(state.site.featured_limit)
        .await
    {
        Ok(albums) => albums,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load featured albums");
            Vec::new()
        }
    };

    html_response(
        status,
        render_landing(&state.site, fields, &featured, notice.as_ref()),
    )
}

pub fn render_landing(
    site: &SiteSettings,
    fields: &AlbumFields,
    featured: &[AlbumRecord],
    banner: Option<&Notice>,
) -> Markup {
    let preview = {
        let name = fields.normalized_subdomain();
        site.public_host(if name.is_empty() { "your-album" } else { name.as_str() })
    };

    let body = html! {
        main {
            h1 class="album-title" { "Your album, your page" }
            p class="album-artist" { "Upload a cover, add your links, and share one address." }

            section style="margin:2rem 0 3rem" {
                @if let Some(banner) = banner {
                    (notice(banner))
                }
                form method="post" action="/albums" enctype="multipart/form-data" class="card" style="padding:1.5rem" {
                    (field_label("cover", "Cover image"))
                    input id="cover" type="file" name="cover" accept="image/*" required;

                    (field_label("artistName", "Artist"))
                    input id="artistName" type="text" name="artistName" value=(fields.artist_name) required;

                    (field_label("albumName", "Album"))
                    input id="albumName" type="text" name="albumName" value=(fields.album_name) required;

                    (field_label("subdomain", "Subdomain"))
                    input id="subdomain" type="text" name="subdomain" value=(fields.subdomain)
                        maxlength=(subdomain::MAX_LEN) required;
                    p class="card-services" { "Your album will be at " strong { (preview) } }
                    button class="button secondary" type="submit" name="action" value="generate" formnovalidate { "Generate" }
                    " "
                    button class="button secondary" type="submit" name="action" value="check" formnovalidate { "Check availability" }

                    h2 style="margin-top:1.5rem" { "Streaming links" }
                    @for service in StreamingService::ALL {
                        (field_label(service.key(), service.display_name()))
                        input id=(service.key()) type="url" name=(service.key())
                            value=(fields.links.get(service).unwrap_or_default())
                            placeholder="https://";
                    }

                    div style="margin-top:1.5rem" {
                        button class="button" type="submit" name="action" value="publish" { "Publish album page" }
                    }
                }
            }

            @if !featured.is_empty() {
                section {
                    h2 style="margin-bottom:1rem" { "Recently published" }
                    div class="cards" {
                        @for album in featured {
                            (album_card(album, site))
                        }
                    }
                }
            }
        }
    };

    page_shell(
        "Sleeve - album pages",
        "Create a page for your album with its cover and streaming links.",
        None,
        body,
    )
}

fn field_label(id: &str, text: &str) -> Markup {
    html! {
        label for=(id) style="display:block;margin-top:1rem;font-weight:600" { (text) }
    }
}
