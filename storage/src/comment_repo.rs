//! Comment repository: discussion replies attached to posts.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StorageError;
use crate::models::{Comment, NewComment};

#[derive(Clone)]
pub struct CommentRepository {
    pool: SqlitePool,
}

impl CommentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn upsert(&self, comment: &NewComment) -> Result<Comment, StorageError> {
        let now = Utc::now();
        sqlx::query(
            r#"
            INSERT INTO comments (tg_id, post_id, user_id, content, commented_at, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(post_id, tg_id) DO UPDATE SET
                content = excluded.content,
                user_id = COALESCE(excluded.user_id, comments.user_id),
                updated_at = excluded.updated_at
            "#,
        )
        .bind(comment.tg_id)
        .bind(comment.post_id)
        .bind(comment.user_id)
        .bind(&comment.content)
        .bind(comment.commented_at)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        debug!(post_id = comment.post_id, tg_id = comment.tg_id, "Upserted comment");
        let saved = sqlx::query_as::<_, Comment>(
            "SELECT * FROM comments WHERE post_id = ? AND tg_id = ?",
        )
        .bind(comment.post_id)
        .bind(comment.tg_id)
        .fetch_optional(&self.pool)
        .await?;

        saved.ok_or_else(|| {
            StorageError::NotFound(format!(
                "comment post_id={} tg_id={}",
                comment.post_id, comment.tg_id
            ))
        })
    }

    /// Comments of a post, newest first. `limit = None` returns all of them.
    pub async fn list_by_post(
        &self,
        post_id: i64,
        limit: Option<i64>,
        offset: i64,
    ) -> Result<Vec<Comment>, StorageError> {
        // SQLite treats a negative LIMIT as "no limit".
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT * FROM comments
            WHERE post_id = ?
            ORDER BY commented_at DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(post_id)
        .bind(limit.unwrap_or(-1))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(comments)
    }

    pub async fn count_by_post(&self, post_id: i64) -> Result<i64, StorageError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comments WHERE post_id = ?")
            .bind(post_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }
}
