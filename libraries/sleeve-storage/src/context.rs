use crate::{albums, create_pool, error::StorageError, run_migrations};
use async_trait::async_trait;
use sleeve_core::{error::Result, storage::AlbumStore, types::*};
use sqlx::SqlitePool;

/// Album record store backed by `SQLite`
#[derive(Clone)]
pub struct SqliteAlbumStore {
    pool: SqlitePool,
}

impl SqliteAlbumStore {
    /// Connect to `database_url` and bring the schema up to date
    pub async fn open(database_url: &str) -> std::result::Result<Self, StorageError> {
        let pool = create_pool(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool; migrations must already have run
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Underlying pool, for queries outside the `AlbumStore` contract
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl AlbumStore for SqliteAlbumStore {
    async fn exists(&self, subdomain: &str) -> Result<bool> {
        albums::exists(&self.pool, subdomain).await
    }

    async fn insert(&self, record: NewAlbumRecord) -> Result<AlbumId> {
        albums::insert(&self.pool, record).await
    }

    async fn get_by_subdomain(&self, subdomain: &str) -> Result<Option<AlbumRecord>> {
        albums::get_by_subdomain(&self.pool, subdomain).await
    }

    async fn get_by_id(&self, id: &AlbumId) -> Result<Option<AlbumRecord>> {
        albums::get_by_id(&self.pool, id).await
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<AlbumRecord>> {
        albums::list_recent(&self.pool, limit).await
    }

    async fn update(&self, id: &AlbumId, changes: UpdateAlbum) -> Result<()> {
        albums::update(&self.pool, id, changes).await
    }

    async fn delete(&self, id: &AlbumId) -> Result<()> {
        albums::delete(&self.pool, id).await
    }
}
