//! Channel repository: registration and lookup of tracked channels.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use crate::error::StorageError;
use crate::models::{Channel, NewChannel};

#[derive(Clone)]
pub struct ChannelRepository {
    pool: SqlitePool,
}

impl ChannelRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts the channel or refreshes it by Telegram id. Missing metadata keeps stored values.
    pub async fn upsert(&self, channel: &NewChannel) -> Result<Channel, StorageError> {
        let now = Utc::now();
        sqlx::query(
            r#"
            INSERT INTO channels (tg_id, username, title, description, member_count, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(tg_id) DO UPDATE SET
                username = COALESCE(excluded.username, channels.username),
                title = COALESCE(excluded.title, channels.title),
                description = COALESCE(excluded.description, channels.description),
                member_count = COALESCE(excluded.member_count, channels.member_count),
                updated_at = excluded.updated_at
            "#,
        )
        .bind(channel.tg_id)
        .bind(&channel.username)
        .bind(&channel.title)
        .bind(&channel.description)
        .bind(channel.member_count)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        info!(
            tg_id = channel.tg_id,
            username = ?channel.username,
            "Saved channel"
        );
        self.get_by_tg_id(channel.tg_id)
            .await?
            .ok_or_else(|| StorageError::NotFound(format!("channel tg_id={}", channel.tg_id)))
    }

    pub async fn list(&self) -> Result<Vec<Channel>, StorageError> {
        let channels = sqlx::query_as::<_, Channel>("SELECT * FROM channels ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(channels)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Channel>, StorageError> {
        let channel = sqlx::query_as::<_, Channel>("SELECT * FROM channels WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(channel)
    }

    pub async fn get_by_tg_id(&self, tg_id: i64) -> Result<Option<Channel>, StorageError> {
        let channel = sqlx::query_as::<_, Channel>("SELECT * FROM channels WHERE tg_id = ?")
            .bind(tg_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(channel)
    }

    /// Case-insensitive lookup; a leading `@` is ignored.
    pub async fn get_by_username(&self, username: &str) -> Result<Option<Channel>, StorageError> {
        let username = username.trim().trim_start_matches('@');
        let channel = sqlx::query_as::<_, Channel>(
            "SELECT * FROM channels WHERE lower(username) = lower(?) ORDER BY id LIMIT 1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(channel)
    }
}
