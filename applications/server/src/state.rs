/// Shared application state
use crate::config::SiteSettings;
use crate::middleware::HostRouter;
use crate::services::AlbumService;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub albums: Arc<AlbumService>,
    pub site: Arc<SiteSettings>,
    /// Reserved-label policy shared by host routing and name validation
    pub hosts: Arc<HostRouter>,
}

impl AppState {
    pub fn new(albums: Arc<AlbumService>, site: SiteSettings) -> Self {
        let hosts = Arc::new(HostRouter::from_site(&site));
        Self {
            albums,
            site: Arc::new(site),
            hosts,
        }
    }
}
