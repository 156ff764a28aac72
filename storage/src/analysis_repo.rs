//! Stored LLM analyses of channels and posts.

use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::info;

use crate::error::StorageError;
use crate::models::{Analysis, AnalysisQuery, AnalysisType, NewAnalysis};

#[derive(Clone)]
pub struct AnalysisRepository {
    pool: SqlitePool,
}

impl AnalysisRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, analysis: &NewAnalysis) -> Result<Analysis, StorageError> {
        let content = serde_json::to_string(&analysis.content)
            .map_err(|e| StorageError::InvalidData(e.to_string()))?;

        let result = sqlx::query(
            r#"
            INSERT INTO analyses (channel_id, post_id, analysis_type, content, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(analysis.channel_id)
        .bind(analysis.post_id)
        .bind(analysis.analysis_type.as_str())
        .bind(&content)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        info!(
            id,
            channel_id = ?analysis.channel_id,
            post_id = ?analysis.post_id,
            analysis_type = %analysis.analysis_type,
            "Saved analysis"
        );
        self.get(id)
            .await?
            .ok_or_else(|| StorageError::NotFound(format!("analysis id={}", id)))
    }

    pub async fn get(&self, id: i64) -> Result<Option<Analysis>, StorageError> {
        let analysis = sqlx::query_as::<_, Analysis>("SELECT * FROM analyses WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(analysis)
    }

    /// Most recent analysis of the given type for a channel.
    pub async fn latest(
        &self,
        channel_id: i64,
        analysis_type: AnalysisType,
    ) -> Result<Option<Analysis>, StorageError> {
        let analysis = sqlx::query_as::<_, Analysis>(
            r#"
            SELECT * FROM analyses
            WHERE channel_id = ? AND analysis_type = ?
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(channel_id)
        .bind(analysis_type.as_str())
        .fetch_optional(&self.pool)
        .await?;
        Ok(analysis)
    }

    /// Filtered listing, newest first.
    pub async fn list(&self, query: &AnalysisQuery) -> Result<Vec<Analysis>, StorageError> {
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT * FROM analyses WHERE 1=1");

        if let Some(channel_id) = query.channel_id {
            builder.push(" AND channel_id = ").push_bind(channel_id);
        }
        if let Some(post_id) = query.post_id {
            builder.push(" AND post_id = ").push_bind(post_id);
        }
        if let Some(analysis_type) = &query.analysis_type {
            builder
                .push(" AND analysis_type = ")
                .push_bind(analysis_type.clone());
        }

        builder
            .push(" ORDER BY created_at DESC, id DESC LIMIT ")
            .push_bind(query.limit)
            .push(" OFFSET ")
            .push_bind(query.offset);

        let analyses = builder
            .build_query_as::<Analysis>()
            .fetch_all(&self.pool)
            .await?;
        Ok(analyses)
    }
}
