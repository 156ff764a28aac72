//! Post repository: channel posts with their counters.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StorageError;
use crate::models::{NewPost, Post};

#[derive(Clone)]
pub struct PostRepository {
    pool: SqlitePool,
}

impl PostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts the post or refreshes its text and counters.
    ///
    /// Counters never go down: live updates carry no view count and must not wipe
    /// numbers obtained by a collection run.
    pub async fn upsert(&self, post: &NewPost) -> Result<Post, StorageError> {
        let now = Utc::now();
        sqlx::query(
            r#"
            INSERT INTO posts (tg_id, channel_id, content, posted_at, views, forwards, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(channel_id, tg_id) DO UPDATE SET
                content = excluded.content,
                views = MAX(posts.views, excluded.views),
                forwards = MAX(posts.forwards, excluded.forwards),
                updated_at = excluded.updated_at
            "#,
        )
        .bind(post.tg_id)
        .bind(post.channel_id)
        .bind(&post.content)
        .bind(post.posted_at)
        .bind(post.views)
        .bind(post.forwards)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        debug!(channel_id = post.channel_id, tg_id = post.tg_id, "Upserted post");
        self.get_by_tg_id(post.channel_id, post.tg_id)
            .await?
            .ok_or_else(|| {
                StorageError::NotFound(format!(
                    "post channel_id={} tg_id={}",
                    post.channel_id, post.tg_id
                ))
            })
    }

    pub async fn get(&self, id: i64) -> Result<Option<Post>, StorageError> {
        let post = sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(post)
    }

    pub async fn get_by_tg_id(
        &self,
        channel_id: i64,
        tg_id: i64,
    ) -> Result<Option<Post>, StorageError> {
        let post =
            sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE channel_id = ? AND tg_id = ?")
                .bind(channel_id)
                .bind(tg_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(post)
    }

    /// Posts of a channel, newest first.
    pub async fn list_by_channel(
        &self,
        channel_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>, StorageError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT * FROM posts
            WHERE channel_id = ?
            ORDER BY posted_at DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(channel_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    pub async fn count_by_channel(&self, channel_id: i64) -> Result<i64, StorageError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts WHERE channel_id = ?")
            .bind(channel_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }
}
