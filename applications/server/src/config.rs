/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "sleeve.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub uploader: UploaderSettings,

    #[serde(default)]
    pub site: SiteSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploaderSettings {
    #[serde(default = "default_upload_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_upload_timeout_secs")]
    pub timeout_secs: u64,
}

/// Public-facing settings: where album pages live and how they are listed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteSettings {
    /// Apex domain album pages hang off, e.g. `example.com`
    #[serde(default)]
    pub domain: String,

    /// Scheme used when building public album URLs
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// Extra host labels that always mean "the main site"
    #[serde(default)]
    pub reserved_labels: Vec<String>,

    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,

    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl SiteSettings {
    /// Settings for a given apex domain with every other field defaulted
    pub fn for_domain(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    /// `name.domain`
    pub fn public_host(&self, subdomain: &str) -> String {
        format!("{}.{}", subdomain, self.domain)
    }

    /// Absolute URL of an album page
    pub fn public_url(&self, subdomain: &str) -> String {
        format!("{}://{}", self.scheme, self.public_host(subdomain))
    }

    /// Absolute URL of the main site
    pub fn home_url(&self) -> String {
        format!("{}://{}", self.scheme, self.domain)
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `./sleeve.toml` is read when
    /// present. `SLEEVE_`-prefixed variables override both, with `__`
    /// between section and key (`SLEEVE_UPLOADER__API_KEY`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("SLEEVE")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("site.reserved_labels")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration required to serve traffic
    pub fn validate(&self) -> Result<()> {
        if self.uploader.api_key.trim().is_empty() {
            return Err(ServerError::Config(
                "Upload API key is required (set SLEEVE_UPLOADER__API_KEY)".to_string(),
            ));
        }

        if self.site.domain.trim().is_empty() {
            return Err(ServerError::Config(
                "Site domain is required (set SLEEVE_SITE__DOMAIN)".to_string(),
            ));
        }

        if !matches!(self.site.scheme.as_str(), "http" | "https") {
            return Err(ServerError::Config(format!(
                "Unsupported site scheme: {}",
                self.site.scheme
            )));
        }

        if self.site.max_upload_bytes == 0 {
            return Err(ServerError::Config(
                "site.max_upload_bytes must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_database_url() -> String {
    "sqlite://./data/sleeve.db".to_string()
}

fn default_upload_endpoint() -> String {
    sleeve_uploader::DEFAULT_ENDPOINT.to_string()
}

fn default_upload_timeout_secs() -> u64 {
    30
}

fn default_scheme() -> String {
    "https".to_string()
}

fn default_featured_limit() -> usize {
    6
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
        }
    }
}

impl Default for UploaderSettings {
    fn default() -> Self {
        Self {
            endpoint: default_upload_endpoint(),
            api_key: String::new(),
            timeout_secs: default_upload_timeout_secs(),
        }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            domain: String::new(),
            scheme: default_scheme(),
            reserved_labels: Vec::new(),
            featured_limit: default_featured_limit(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}
