use chrono::{DateTime, Utc};
use sleeve_core::{
    error::{Result, SleeveError},
    types::*,
};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

const SELECT_COLUMNS: &str = "SELECT id, subdomain, artist_name, album_name, cover_url,
        streaming_links, created_at, updated_at
 FROM albums";

fn timestamp(millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| SleeveError::store(format!("Invalid timestamp: {millis}")))
}

fn from_row(row: &SqliteRow) -> Result<AlbumRecord> {
    let links: String = row.get("streaming_links");
    let streaming_links = serde_json::from_str(&links)
        .map_err(|e| SleeveError::store(format!("Corrupt streaming_links column: {e}")))?;

    Ok(AlbumRecord {
        id: row.get("id"),
        subdomain: row.get("subdomain"),
        artist_name: row.get("artist_name"),
        album_name: row.get("album_name"),
        cover_url: row.get("cover_url"),
        streaming_links,
        created_at: timestamp(row.get("created_at"))?,
        updated_at: timestamp(row.get("updated_at"))?,
    })
}

pub async fn exists(pool: &SqlitePool, subdomain: &str) -> Result<bool> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM albums WHERE subdomain = ?")
        .bind(subdomain)
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("count") > 0)
}

pub async fn insert(pool: &SqlitePool, record: NewAlbumRecord) -> Result<AlbumId> {
    let id = AlbumId::generate();
    let links = serde_json::to_string(&record.streaming_links)?;

    sqlx::query(
        "INSERT INTO albums (id, subdomain, artist_name, album_name, cover_url,
                             streaming_links, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(&record.subdomain)
    .bind(&record.artist_name)
    .bind(&record.album_name)
    .bind(&record.cover_url)
    .bind(links)
    .bind(record.created_at.timestamp_millis())
    .bind(record.updated_at.timestamp_millis())
    .execute(pool)
    .await?;

    Ok(id)
}

/// Oldest record with the subdomain wins when duplicates exist
pub async fn get_by_subdomain(pool: &SqlitePool, subdomain: &str) -> Result<Option<AlbumRecord>> {
    let sql = format!("{SELECT_COLUMNS} WHERE subdomain = ? ORDER BY rowid ASC LIMIT 1");
    let row = sqlx::query(&sql)
        .bind(subdomain)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(from_row).transpose()
}

pub async fn get_by_id(pool: &SqlitePool, id: &AlbumId) -> Result<Option<AlbumRecord>> {
    let sql = format!("{SELECT_COLUMNS} WHERE id = ?");
    let row = sqlx::query(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(from_row).transpose()
}

pub async fn list_recent(pool: &SqlitePool, limit: usize) -> Result<Vec<AlbumRecord>> {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);

    let sql = format!("{SELECT_COLUMNS} ORDER BY created_at DESC, rowid DESC LIMIT ?");
    let rows = sqlx::query(&sql)
        .bind(limit)
        .fetch_all(pool)
        .await?;

    rows.iter().map(from_row).collect()
}

pub async fn update(pool: &SqlitePool, id: &AlbumId, changes: UpdateAlbum) -> Result<()> {
    let links = changes
        .streaming_links
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;

    let result = sqlx::query(
        "UPDATE albums SET
             artist_name = COALESCE(?, artist_name),
             album_name = COALESCE(?, album_name),
             cover_url = COALESCE(?, cover_url),
             streaming_links = COALESCE(?, streaming_links),
             updated_at = ?
         WHERE id = ?",
    )
    .bind(changes.artist_name)
    .bind(changes.album_name)
    .bind(changes.cover_url)
    .bind(links)
    .bind(Utc::now().timestamp_millis())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(SleeveError::not_found("Album", id.as_str()));
    }

    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: &AlbumId) -> Result<()> {
    let result = sqlx::query("DELETE FROM albums WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(SleeveError::not_found("Album", id.as_str()));
    }

    Ok(())
}
