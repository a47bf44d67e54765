/// Server services
pub mod albums;

pub use albums::AlbumService;
