//! Record store trait for album pages

use crate::error::Result;
use crate::types::{AlbumId, AlbumRecord, NewAlbumRecord, UpdateAlbum};
use async_trait::async_trait;

/// Document store holding published album records
///
/// Records are keyed by a store-assigned [`AlbumId`] and queried by their
/// `subdomain` field. Every operation may fail with
/// [`SleeveError::StoreUnavailable`](crate::SleeveError::StoreUnavailable);
/// callers surface that failure and do not retry.
///
/// The store does not enforce subdomain uniqueness. Callers check
/// [`exists`](AlbumStore::exists) before [`insert`](AlbumStore::insert), and
/// two concurrent writers may both pass that check.
#[cfg_attr(feature = "mocks", mockall::automock)]
#[async_trait]
pub trait AlbumStore: Send + Sync {
    /// Whether at least one record has exactly this subdomain
    async fn exists(&self, subdomain: &str) -> Result<bool>;

    /// Persist a record and return its newly assigned id
    async fn insert(&self, record: NewAlbumRecord) -> Result<AlbumId>;

    /// First record with this subdomain, if any
    async fn get_by_subdomain(&self, subdomain: &str) -> Result<Option<AlbumRecord>>;

    /// Record by id, if any
    async fn get_by_id(&self, id: &AlbumId) -> Result<Option<AlbumRecord>>;

    /// At most `limit` records, newest `created_at` first
    async fn list_recent(&self, limit: usize) -> Result<Vec<AlbumRecord>>;

    /// Apply a partial update and bump `updated_at`
    async fn update(&self, id: &AlbumId, changes: UpdateAlbum) -> Result<()>;

    /// Remove a record
    async fn delete(&self, id: &AlbumId) -> Result<()>;
}
