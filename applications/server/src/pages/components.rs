//! Shared HTML components for album pages and the landing page.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use sleeve_core::AlbumRecord;

use crate::config::SiteSettings;

/// Inline CSS for every page.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#f6f7fb;--fg:#0f172a;--fg2:#475569;--fg3:#94a3b8;--accent:#2563eb;--accent-hover:#1d4ed8;--surface:#fff;--border:#e2e8f0;--ok:#15803d;--err:#b91c1c}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
img{max-width:100%;height:auto;display:block}
main{max-width:960px;margin:0 auto;padding:2rem 1rem}

.topbar{display:flex;justify-content:space-between;align-items:center;max-width:960px;margin:0 auto;padding:1rem;font-size:.9rem;color:var(--fg2)}
.topbar .address{font-family:ui-monospace,Menlo,monospace;color:var(--fg3)}

.album{display:grid;grid-template-columns:1fr 1fr;gap:3rem;align-items:start}
.album-cover{width:100%;aspect-ratio:1;object-fit:cover;border-radius:16px;box-shadow:0 20px 40px rgba(15,23,42,.18)}
.album-title{font-size:2.6rem;font-weight:800;line-height:1.15;letter-spacing:-.02em}
.album-artist{font-size:1.4rem;color:var(--fg2);margin-top:.5rem}
.listen{margin-top:2rem}
.listen h2{font-size:1.15rem;margin-bottom:.75rem}
.service{display:flex;justify-content:space-between;align-items:center;padding:.9rem 1.25rem;margin-bottom:.6rem;border-radius:12px;color:#fff;font-weight:600}
.service:hover{text-decoration:none;filter:brightness(.92)}
.service-spotify{background:#1db954}
.service-appleMusic{background:#ec4899}
.service-youtube{background:#ef4444}
.service-soundcloud{background:#f97316}
.service-bandcamp{background:#3b82f6}
.service-tidal{background:#8b5cf6}
.service-amazonMusic{background:#eab308}
.service-deezer{background:#6366f1}

.empty{text-align:center;padding:5rem 1rem}
.empty h1{font-size:2rem;margin-bottom:.5rem}
.empty p{color:var(--fg2);margin-bottom:1.5rem}

.button{display:inline-block;background:var(--accent);color:#fff;border:none;border-radius:8px;padding:.65rem 1.2rem;font-size:.95rem;font-weight:600;cursor:pointer}
.button:hover{background:var(--accent-hover);text-decoration:none}
.button.secondary{background:var(--surface);color:var(--fg);border:1px solid var(--border)}

.notice{padding:.8rem 1rem;border-radius:8px;margin-bottom:1.25rem;font-size:.95rem}
.notice-success{background:#dcfce7;color:var(--ok)}
.notice-error{background:#fee2e2;color:var(--err)}
.notice-info{background:#dbeafe;color:var(--accent)}

.cards{display:grid;grid-template-columns:repeat(auto-fill,minmax(200px,1fr));gap:1.25rem}
.card{background:var(--surface);border-radius:12px;overflow:hidden;box-shadow:0 4px 14px rgba(15,23,42,.08);color:var(--fg)}
.card:hover{text-decoration:none;transform:translateY(-3px)}
.card img{width:100%;aspect-ratio:1;object-fit:cover}
.card-body{padding:.8rem 1rem}
.card-title{font-weight:700}
.card-artist{color:var(--fg2);font-size:.9rem}
.card-services{color:var(--fg3);font-size:.8rem;margin-top:.35rem}

@media(max-width:720px){.album{grid-template-columns:1fr}.album-title{font-size:2rem}}
"#;

/// Content-Security-Policy header value.
///
/// No scripts. Cover images come from the image host over https.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src https: data:; form-action 'self'; frame-ancestors 'none'";

/// Full HTML document around `body`.
pub fn page_shell(title: &str, description: &str, image: Option<&str>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                meta name="description" content=(description);
                meta property="og:title" content=(title);
                meta property="og:description" content=(description);
                @if let Some(image) = image.filter(|u| is_safe_url(u)) {
                    meta property="og:image" content=(image);
                }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body { (body) }
        }
    }
}

/// Kind of a transient banner shown above a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }
}

pub fn notice(notice: &Notice) -> Markup {
    let class = match notice.kind {
        NoticeKind::Success => "notice notice-success",
        NoticeKind::Error => "notice notice-error",
        NoticeKind::Info => "notice notice-info",
    };

    html! {
        div class=(class) role="status" { (notice.message) }
    }
}

/// Compact card linking to an album page.
pub fn album_card(album: &AlbumRecord, site: &SiteSettings) -> Markup {
    let services = album.streaming_links.available();

    html! {
        a class="card" href=(site.public_url(&album.subdomain)) {
            @if is_safe_url(&album.cover_url) {
                img src=(album.cover_url) alt={(album.album_name) " by " (album.artist_name)} loading="lazy";
            }
            div class="card-body" {
                div class="card-title" { (album.album_name) }
                div class="card-artist" { (album.artist_name) }
                @if !services.is_empty() {
                    div class="card-services" {
                        @for (i, (service, _)) in services.iter().enumerate() {
                            @if i > 0 { " · " }
                            (service.display_name())
                        }
                    }
                }
            }
        }
    }
}

/// Only plain web links are ever put into `href`/`src`.
pub fn is_safe_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// HTML response with security headers.
pub fn html_response(status: StatusCode, markup: Markup) -> Response {
    let mut response = (status, markup.into_string()).into_response();
    let headers = response.headers_mut();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_urls_are_http_only() {
        assert!(is_safe_url("https://i.ibb.co/x.png"));
        assert!(is_safe_url("http://example.com"));
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("data:image/png;base64,AAAA"));
    }

    #[test]
    fn shell_escapes_title() {
        let page = page_shell("<b>Air</b>", "desc", None, html! { p { "x" } }).into_string();
        assert!(page.contains("&lt;b&gt;Air&lt;/b&gt;"));
        assert!(!page.contains("og:image"));
    }

    #[test]
    fn html_response_sets_headers() {
        let response = html_response(StatusCode::NOT_FOUND, html! { p { "gone" } });
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
        assert_eq!(response.headers().get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
    }
}
