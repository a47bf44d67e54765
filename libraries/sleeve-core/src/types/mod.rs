mod album;
mod ids;
mod streaming;

pub use album::{AlbumRecord, CreateAlbum, NewAlbumRecord, UpdateAlbum};
pub use ids::AlbumId;
pub use streaming::{StreamingLinks, StreamingService};
