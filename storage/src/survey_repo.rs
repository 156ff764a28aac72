//! Generated audience surveys.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use crate::error::StorageError;
use crate::models::{NewSurvey, Survey};

#[derive(Clone)]
pub struct SurveyRepository {
    pool: SqlitePool,
}

impl SurveyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, survey: &NewSurvey) -> Result<Survey, StorageError> {
        let questions = serde_json::to_string(&survey.questions)
            .map_err(|e| StorageError::InvalidData(e.to_string()))?;
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO surveys (channel_id, title, description, questions, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(survey.channel_id)
        .bind(&survey.title)
        .bind(&survey.description)
        .bind(&questions)
        .bind(&survey.status)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        info!(id, channel_id = survey.channel_id, "Saved survey");

        let saved = sqlx::query_as::<_, Survey>("SELECT * FROM surveys WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        saved.ok_or_else(|| StorageError::NotFound(format!("survey id={}", id)))
    }

    pub async fn list_by_channel(
        &self,
        channel_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Survey>, StorageError> {
        let surveys = sqlx::query_as::<_, Survey>(
            r#"
            SELECT * FROM surveys
            WHERE channel_id = ?
            ORDER BY created_at DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(channel_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(surveys)
    }
}
