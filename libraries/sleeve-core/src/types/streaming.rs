//! Streaming service links

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A streaming service an album page can link to.
///
/// The declaration order is the display order on album pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamingService {
    Spotify,
    AppleMusic,
    YouTube,
    SoundCloud,
    Bandcamp,
    Tidal,
    AmazonMusic,
    Deezer,
}

impl StreamingService {
    /// All known services, in display order
    pub const ALL: [StreamingService; 8] = [
        StreamingService::Spotify,
        StreamingService::AppleMusic,
        StreamingService::YouTube,
        StreamingService::SoundCloud,
        StreamingService::Bandcamp,
        StreamingService::Tidal,
        StreamingService::AmazonMusic,
        StreamingService::Deezer,
    ];

    /// Key used in the `streamingLinks` map and in form field names
    pub fn key(self) -> &'static str {
        match self {
            StreamingService::Spotify => "spotify",
            StreamingService::AppleMusic => "appleMusic",
            StreamingService::YouTube => "youtube",
            StreamingService::SoundCloud => "soundcloud",
            StreamingService::Bandcamp => "bandcamp",
            StreamingService::Tidal => "tidal",
            StreamingService::AmazonMusic => "amazonMusic",
            StreamingService::Deezer => "deezer",
        }
    }

    /// Human-readable service name
    pub fn display_name(self) -> &'static str {
        match self {
            StreamingService::Spotify => "Spotify",
            StreamingService::AppleMusic => "Apple Music",
            StreamingService::YouTube => "YouTube",
            StreamingService::SoundCloud => "SoundCloud",
            StreamingService::Bandcamp => "Bandcamp",
            StreamingService::Tidal => "Tidal",
            StreamingService::AmazonMusic => "Amazon Music",
            StreamingService::Deezer => "Deezer",
        }
    }

    /// Look up a service by its map key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|service| service.key() == key)
    }
}

impl fmt::Display for StreamingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Map from service key to URL.
///
/// The map is open: keys outside [`StreamingService::ALL`] are kept so they
/// survive a store round-trip, but [`StreamingLinks::available`] never yields
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StreamingLinks(BTreeMap<String, String>);

impl StreamingLinks {
    /// Create an empty link map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the URL for a known service
    pub fn set(&mut self, service: StreamingService, url: impl Into<String>) {
        self.0.insert(service.key().to_string(), url.into());
    }

    /// Set the URL for an arbitrary key
    pub fn insert(&mut self, key: impl Into<String>, url: impl Into<String>) {
        self.0.insert(key.into(), url.into());
    }

    /// URL for a known service, if present and non-empty
    pub fn get(&self, service: StreamingService) -> Option<&str> {
        self.0
            .get(service.key())
            .map(|url| url.trim())
            .filter(|url| !url.is_empty())
    }

    /// Present services with their URLs, in display order
    pub fn available(&self) -> Vec<(StreamingService, &str)> {
        StreamingService::ALL
            .into_iter()
            .filter_map(|service| self.get(service).map(|url| (service, url)))
            .collect()
    }

    /// Raw entries, including unknown keys and empty values
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether no service has a usable URL
    pub fn is_empty(&self) -> bool {
        self.available().is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StreamingLinks {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
