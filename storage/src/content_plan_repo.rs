//! Content plan entries, one row per planned day.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StorageError;
use crate::models::{ContentPlan, NewContentPlan};

#[derive(Clone)]
pub struct ContentPlanRepository {
    pool: SqlitePool,
}

impl ContentPlanRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, plan: &NewContentPlan) -> Result<ContentPlan, StorageError> {
        let content = serde_json::to_string(&plan.content)
            .map_err(|e| StorageError::InvalidData(e.to_string()))?;
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO content_plans (channel_id, title, description, planned_date, content, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(plan.channel_id)
        .bind(&plan.title)
        .bind(&plan.description)
        .bind(plan.planned_date)
        .bind(&content)
        .bind(&plan.status)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, channel_id = plan.channel_id, "Saved content plan entry");

        let saved = sqlx::query_as::<_, ContentPlan>("SELECT * FROM content_plans WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        saved.ok_or_else(|| StorageError::NotFound(format!("content plan id={}", id)))
    }

    /// Plans of a channel, newest first.
    pub async fn list_by_channel(
        &self,
        channel_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ContentPlan>, StorageError> {
        let plans = sqlx::query_as::<_, ContentPlan>(
            r#"
            SELECT * FROM content_plans
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
        Ok(plans)
    }
}
