//! Users who authored comments, merged by Telegram id.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StorageError;
use crate::models::{NewUser, User};

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts the user or refreshes the known profile fields of an existing one.
    pub async fn upsert(&self, user: &NewUser) -> Result<User, StorageError> {
        let now = Utc::now();
        sqlx::query(
            r#"
            INSERT INTO users (tg_id, username, first_name, last_name, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(tg_id) DO UPDATE SET
                username = COALESCE(excluded.username, users.username),
                first_name = COALESCE(excluded.first_name, users.first_name),
                last_name = COALESCE(excluded.last_name, users.last_name),
                updated_at = excluded.updated_at
            "#,
        )
        .bind(user.tg_id)
        .bind(&user.username)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        debug!(tg_id = user.tg_id, "Upserted user");
        self.get_by_tg_id(user.tg_id)
            .await?
            .ok_or_else(|| StorageError::NotFound(format!("user tg_id={}", user.tg_id)))
    }

    pub async fn get(&self, id: i64) -> Result<Option<User>, StorageError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn get_by_tg_id(&self, tg_id: i64) -> Result<Option<User>, StorageError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE tg_id = ?")
            .bind(tg_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }
}
