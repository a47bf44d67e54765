//! Asset uploader trait for cover images

use crate::error::Result;
use async_trait::async_trait;

/// A cover image as received from the submitter
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CoverImage {
    /// Original file name, used as the upload part name
    pub file_name: String,
    /// MIME type of the bytes
    pub content_type: String,
    /// Raw image bytes
    pub bytes: Vec<u8>,
}

impl CoverImage {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for CoverImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoverImage")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Where the image host put an uploaded asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedAsset {
    /// Stable public URL of the image
    pub url: String,
    /// URL that removes the asset again, when the host provides one
    pub delete_url: Option<String>,
}

/// External image host
///
/// Implementations must map every failure (transport error, rejected upload,
/// missing URL in the response) to
/// [`SleeveError::UploadFailed`](crate::SleeveError::UploadFailed).
#[cfg_attr(feature = "mocks", mockall::automock)]
#[async_trait]
pub trait AssetUploader: Send + Sync {
    /// Upload one image and return its public location
    async fn upload(&self, image: CoverImage) -> Result<UploadedAsset>;
}
