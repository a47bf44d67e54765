//! Album types

use super::{AlbumId, StreamingLinks};
use crate::upload::CoverImage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published album page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumRecord {
    pub id: AlbumId,
    pub subdomain: String,
    pub artist_name: String,
    pub album_name: String,
    pub cover_url: String,
    #[serde(default)]
    pub streaming_links: StreamingLinks,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A record ready for insertion; the store assigns the id
#[derive(Debug, Clone, PartialEq)]
pub struct NewAlbumRecord {
    pub subdomain: String,
    pub artist_name: String,
    pub album_name: String,
    pub cover_url: String,
    pub streaming_links: StreamingLinks,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewAlbumRecord {
    /// Attach a store-assigned id
    pub fn with_id(self, id: AlbumId) -> AlbumRecord {
        AlbumRecord {
            id,
            subdomain: self.subdomain,
            artist_name: self.artist_name,
            album_name: self.album_name,
            cover_url: self.cover_url,
            streaming_links: self.streaming_links,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Partial update of an album record.
///
/// The subdomain is intentionally absent: names cannot be changed once
/// published.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateAlbum {
    pub artist_name: Option<String>,
    pub album_name: Option<String>,
    pub cover_url: Option<String>,
    pub streaming_links: Option<StreamingLinks>,
}

/// Everything a submission provides to publish an album page
#[derive(Debug, Clone)]
pub struct CreateAlbum {
    pub artist_name: String,
    pub album_name: String,
    pub subdomain: String,
    pub cover: CoverImage,
    pub streaming_links: StreamingLinks,
}

impl CreateAlbum {
    /// Build the record to insert once the cover has been hosted
    pub fn into_record(self, cover_url: String, now: DateTime<Utc>) -> NewAlbumRecord {
        NewAlbumRecord {
            subdomain: self.subdomain,
            artist_name: self.artist_name,
            album_name: self.album_name,
            cover_url,
            streaming_links: self.streaming_links,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StreamingService;

    #[test]
    fn into_record_stamps_both_timestamps() {
        let mut links = StreamingLinks::new();
        links.set(StreamingService::Tidal, "https://tidal.com/album/1");

        let create = CreateAlbum {
            artist_name: "Air".into(),
            album_name: "Moon Safari".into(),
            subdomain: "air-moonsafari".into(),
            cover: CoverImage::new("cover.png", "image/png", vec![1, 2, 3]),
            streaming_links: links.clone(),
        };

        let now = Utc::now();
        let record = create.into_record("https://i.example/cover.png".into(), now);

        assert_eq!(record.created_at, now);
        assert_eq!(record.updated_at, now);
        assert_eq!(record.cover_url, "https://i.example/cover.png");
        assert_eq!(record.streaming_links, links);
    }

    #[test]
    fn record_json_uses_camel_case() {
        let now = Utc::now();
        let record = NewAlbumRecord {
            subdomain: "air-moonsafari".into(),
            artist_name: "Air".into(),
            album_name: "Moon Safari".into(),
            cover_url: "https://i.example/c.png".into(),
            streaming_links: StreamingLinks::new(),
            created_at: now,
            updated_at: now,
        }
        .with_id(AlbumId::new("a1"));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["artistName"], "Air");
        assert_eq!(json["coverUrl"], "https://i.example/c.png");
        assert!(json["createdAt"].is_string());
    }
}
