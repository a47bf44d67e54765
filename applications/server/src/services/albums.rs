/// Album publishing service
use chrono::Utc;
use sleeve_core::{
    AlbumId, AlbumRecord, AlbumStore, AssetUploader, CreateAlbum, Result, SleeveError,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Orchestrates the record store and the image host.
///
/// Mutations run on their own task, so a caller that stops waiting (a
/// dropped connection, for instance) does not abort an in-flight create.
#[derive(Clone)]
pub struct AlbumService {
    store: Arc<dyn AlbumStore>,
    uploader: Arc<dyn AssetUploader>,
}

impl AlbumService {
    pub fn new(store: Arc<dyn AlbumStore>, uploader: Arc<dyn AssetUploader>) -> Self {
        Self { store, uploader }
    }

    /// True when no record uses `name` yet
    pub async fn is_subdomain_available(&self, name: &str) -> Result<bool> {
        Ok(!self.store.exists(name).await?)
    }

    /// Upload the cover, then insert the record.
    ///
    /// Does not check availability; see [`publish_album`](Self::publish_album).
    pub async fn create_album(&self, data: CreateAlbum) -> Result<AlbumId> {
        let store = Arc::clone(&self.store);
        let uploader = Arc::clone(&self.uploader);

        tokio::spawn(upload_and_insert(store, uploader, data))
            .await
            .map_err(|e| SleeveError::store(format!("Album creation task aborted: {}", e)))?
    }

    /// Availability check followed by [`create_album`](Self::create_album).
    ///
    /// The two steps are not atomic: concurrent submissions for the same
    /// name can both pass the check and both insert.
    pub async fn publish_album(&self, data: CreateAlbum) -> Result<AlbumId> {
        if !self.is_subdomain_available(&data.subdomain).await? {
            return Err(SleeveError::SubdomainTaken(data.subdomain));
        }

        self.create_album(data).await
    }

    pub async fn get_album_by_subdomain(&self, name: &str) -> Result<Option<AlbumRecord>> {
        self.store.get_by_subdomain(name).await
    }

    pub async fn get_album_by_id(&self, id: &AlbumId) -> Result<Option<AlbumRecord>> {
        self.store.get_by_id(id).await
    }

    /// Most recently created albums, newest first
    pub async fn get_featured_albums(&self, limit: usize) -> Result<Vec<AlbumRecord>> {
        self.store.list_recent(limit).await
    }

    pub async fn delete_album_by_subdomain(&self, name: &str) -> Result<AlbumId> {
        delete_by_subdomain(self.store.as_ref(), name).await
    }
}

async fn upload_and_insert(
    store: Arc<dyn AlbumStore>,
    uploader: Arc<dyn AssetUploader>,
    mut data: CreateAlbum,
) -> Result<AlbumId> {
    let subdomain = data.subdomain.clone();

    let asset = uploader.upload(std::mem::take(&mut data.cover)).await?;
    let record = data.into_record(asset.url.clone(), Utc::now());

    match store.insert(record).await {
        Ok(id) => {
            info!(id = %id, subdomain = %subdomain, "Album published");
            Ok(id)
        }
        Err(e) => {
            warn!(
                subdomain = %subdomain,
                cover_url = %asset.url,
                delete_url = asset.delete_url.as_deref().unwrap_or("-"),
                error = %e,
                "Insert failed after upload, cover asset orphaned"
            );
            Err(e)
        }
    }
}

/// Delete the record `get_by_subdomain` would return for `name`.
pub async fn delete_by_subdomain(store: &dyn AlbumStore, name: &str) -> Result<AlbumId> {
    let record = store
        .get_by_subdomain(name)
        .await?
        .ok_or_else(|| SleeveError::not_found("Album", name))?;

    store.delete(&record.id).await?;
    info!(id = %record.id, subdomain = %name, "Album deleted");

    Ok(record.id)
}
