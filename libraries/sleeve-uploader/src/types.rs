//! Wire types for the image host API.

use serde::Deserialize;

/// Public ImgBB upload endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.imgbb.com/1/upload";

/// Connection settings for the image host
#[derive(Debug, Clone)]
pub struct ImgbbConfig {
    /// Upload endpoint URL
    pub endpoint: String,
    /// API key sent as the `key` query parameter
    pub api_key: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
}

impl ImgbbConfig {
    /// Settings for `endpoint` with the default 30 second timeout
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            timeout_secs: 30,
        }
    }

    /// Override the whole-request timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Upload response envelope
#[derive(Debug, Deserialize)]
pub(crate) struct ImgbbResponse {
    #[serde(default)]
    pub success: bool,
    pub data: Option<ImgbbImage>,
    pub error: Option<ImgbbErrorBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImgbbImage {
    #[serde(default)]
    pub url: String,
    pub delete_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImgbbErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_success_response() {
        let body = r#"{
            "data": {
                "id": "2ndCYJK",
                "url": "https://i.ibb.co/w04Prt6/c1f64245afb2.gif",
                "delete_url": "https://ibb.co/2ndCYJK/670a7e48ddcb85ac340c717a41047e5c"
            },
            "success": true,
            "status": 200
        }"#;

        let parsed: ImgbbResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.success);
        let data = parsed.data.unwrap();
        assert_eq!(data.url, "https://i.ibb.co/w04Prt6/c1f64245afb2.gif");
        assert!(data.delete_url.is_some());
    }

    #[test]
    fn parses_error_response() {
        let body = r#"{
            "status_code": 400,
            "error": {"message": "Invalid API v1 key.", "code": 100},
            "status_txt": "Bad Request"
        }"#;

        let parsed: ImgbbResponse = serde_json::from_str(body).unwrap();
        assert!(!parsed.success);
        assert!(parsed.data.is_none());
        assert_eq!(parsed.error.unwrap().message, "Invalid API v1 key.");
    }
}
