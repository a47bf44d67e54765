//! Sleeve Storage
//!
//! `SQLite` record store for published album pages.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: the [`albums`] module owns its queries
//! - **Context**: [`SqliteAlbumStore`] implements the core `AlbumStore` trait
//!   on top of a connection pool
//! - **Embedded Migrations**: the schema ships inside the binary
//!
//! # Example
//!
//! ```rust,no_run
//! use sleeve_core::AlbumStore;
//! use sleeve_storage::SqliteAlbumStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteAlbumStore::open("sqlite://sleeve.db").await?;
//!
//! let recent = store.list_recent(6).await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod albums;

pub use context::SqliteAlbumStore;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply any pending schema migrations to `pool`.
///
/// [`SqliteAlbumStore::open`] already does this; call it directly only when
/// wrapping a pool with [`SqliteAlbumStore::from_pool`].
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Open a pool on `database_url` (e.g. `sqlite://./data/sleeve.db`).
///
/// The database file is created when missing and put in WAL mode.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(url = %database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("SQLite pool created");

    Ok(pool)
}
