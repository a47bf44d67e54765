/// Album submission parsing and validation
///
/// Both the HTML form and the JSON API accept the same `multipart/form-data`
/// body: a `cover` file, `artistName`, `albumName`, `subdomain`, one field
/// per streaming service key, and for the HTML form an optional `action`.
use crate::error::{Result, ServerError};
use crate::middleware::HostRouter;
use axum::http::{header, HeaderMap};
use bytes::Bytes;
use sleeve_core::{subdomain, CoverImage, CreateAlbum, SleeveError, StreamingLinks, StreamingService};
use url::Url;

/// What the submitter asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormAction {
    #[default]
    Publish,
    /// Fill the subdomain from artist and album
    Generate,
    /// Report whether the subdomain is free
    Check,
}

impl FormAction {
    fn parse(value: &str) -> Self {
        match value.trim() {
            "generate" => FormAction::Generate,
            "check" => FormAction::Check,
            _ => FormAction::Publish,
        }
    }
}

/// Text fields of a submission, kept as typed so a failed form can be
/// shown again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumFields {
    pub artist_name: String,
    pub album_name: String,
    pub subdomain: String,
    pub links: StreamingLinks,
}

#[derive(Debug, Default)]
pub struct AlbumForm {
    pub fields: AlbumFields,
    pub cover: Option<CoverImage>,
    pub action: FormAction,
}

impl AlbumFields {
    /// Subdomain as it would be published
    pub fn normalized_subdomain(&self) -> String {
        subdomain::normalize(&self.subdomain)
    }

    /// Check required fields and build the creation request.
    ///
    /// Names that `hosts` treats as the main site are refused, since their
    /// page could never be served.
    pub fn validate(
        &self,
        cover: Option<CoverImage>,
        hosts: &HostRouter,
    ) -> sleeve_core::Result<CreateAlbum> {
        let artist_name = self.artist_name.trim();
        if artist_name.is_empty() {
            return Err(SleeveError::validation("Artist name is required"));
        }

        let album_name = self.album_name.trim();
        if album_name.is_empty() {
            return Err(SleeveError::validation("Album name is required"));
        }

        let name = self.normalized_subdomain();
        if !subdomain::is_valid(&name) {
            return Err(SleeveError::validation(format!(
                "Subdomain must be 1-{} characters of a-z, 0-9 and -",
                subdomain::MAX_LEN
            )));
        }
        if hosts.is_reserved(&name) {
            return Err(SleeveError::validation(format!(
                "The subdomain \"{}\" is reserved",
                name
            )));
        }

        let cover = cover
            .filter(|c| !c.is_empty())
            .ok_or_else(|| SleeveError::validation("Cover image is required"))?;

        let mut links = StreamingLinks::new();
        for (service, url) in self.links.available() {
            check_link(service, url)?;
            links.set(service, url);
        }

        Ok(CreateAlbum {
            artist_name: artist_name.to_string(),
            album_name: album_name.to_string(),
            subdomain: name,
            cover,
            streaming_links: links,
        })
    }
}

fn check_link(service: StreamingService, raw: &str) -> sleeve_core::Result<()> {
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => Ok(()),
        _ => Err(SleeveError::validation(format!(
            "{} link must be an http(s) URL",
            service.display_name()
        ))),
    }
}

/// Parse a multipart album submission
pub async fn read_album_form(headers: &HeaderMap, body: Bytes) -> Result<AlbumForm> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ServerError::BadRequest("Missing Content-Type".to_string()))?;

    if !content_type.starts_with("multipart/form-data") {
        return Err(ServerError::BadRequest(
            "Expected multipart/form-data".to_string(),
        ));
    }

    let boundary = multer::parse_boundary(content_type)
        .map_err(|_| ServerError::BadRequest("Missing boundary".to_string()))?;

    let stream = futures_util::stream::once(async move { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut form = AlbumForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::BadRequest(format!("Failed to parse multipart: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == "cover" {
            let file_name = field.file_name().unwrap_or("").to_string();
            let content_type = field
                .content_type()
                .map(|m| m.to_string())
                .unwrap_or_else(|| {
                    mime_guess::from_path(&file_name)
                        .first_or_octet_stream()
                        .to_string()
                });
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ServerError::BadRequest(format!("Failed to read cover: {}", e)))?;

            // Browsers send an empty part when no file was picked
            if !bytes.is_empty() {
                let file_name = if file_name.is_empty() {
                    "cover".to_string()
                } else {
                    file_name
                };
                form.cover = Some(CoverImage::new(file_name, content_type, bytes.to_vec()));
            }
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| ServerError::BadRequest(format!("Failed to read {}: {}", name, e)))?;

        match name.as_str() {
            "artistName" => form.fields.artist_name = value,
            "albumName" => form.fields.album_name = value,
            "subdomain" => form.fields.subdomain = value,
            "action" => form.action = FormAction::parse(&value),
            key => {
                if let Some(service) = StreamingService::from_key(key) {
                    form.fields.links.set(service, value.trim());
                }
            }
        }
    }

    Ok(form)
}
