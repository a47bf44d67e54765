//! Image host client.

use crate::error::{Result, UploadError};
use crate::types::{ImgbbConfig, ImgbbResponse};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use sleeve_core::{AssetUploader, CoverImage, UploadedAsset};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Client for an ImgBB-compatible image host.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ImgbbClient {
    http: Client,
    endpoint: Url,
    api_key: String,
}

impl ImgbbClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ImgbbConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(UploadError::InvalidConfig("API key cannot be empty".into()));
        }

        let endpoint = Url::parse(config.endpoint.trim())
            .map_err(|e| UploadError::InvalidConfig(format!("Invalid endpoint: {}", e)))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(UploadError::InvalidConfig(
                "Endpoint must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Sleeve/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint,
            api_key: config.api_key,
        })
    }

    /// Upload endpoint in use.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Upload one image and return where the host put it.
    pub async fn upload_image(&self, image: CoverImage) -> Result<UploadedAsset> {
        let file_name = image.file_name.clone();
        let size = image.len();

        debug!(file = %file_name, size, "Uploading cover image");

        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.content_type)?;
        let form = Form::new().part("image", part);

        let response = self
            .http
            .post(self.endpoint.clone())
            .query(&[("key", self.api_key.as_str())])
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    UploadError::Unreachable(e.to_string())
                } else {
                    UploadError::Request(e)
                }
            })?;

        let status = response.status();
        let body = response.text().await?;

        let parsed: ImgbbResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                return Err(UploadError::Rejected {
                    status: status.as_u16(),
                    message: body,
                });
            }
            Err(e) => {
                return Err(UploadError::ParseError(format!(
                    "Failed to parse upload response: {}",
                    e
                )));
            }
        };

        if !status.is_success() || !parsed.success {
            let message = parsed
                .error
                .map(|e| e.message)
                .unwrap_or_else(|| "upload not accepted".to_string());
            warn!(status = status.as_u16(), message = %message, "Image host rejected upload");
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let data = parsed.data.ok_or(UploadError::MissingUrl)?;
        if data.url.trim().is_empty() {
            return Err(UploadError::MissingUrl);
        }

        info!(file = %file_name, size, url = %data.url, "Cover image uploaded");

        Ok(UploadedAsset {
            url: data.url,
            delete_url: data.delete_url,
        })
    }
}

#[async_trait]
impl AssetUploader for ImgbbClient {
    async fn upload(&self, image: CoverImage) -> sleeve_core::Result<UploadedAsset> {
        Ok(self.upload_image(image).await?)
    }
}
