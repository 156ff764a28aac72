//! Reaction counts. A target's reactions are always replaced as a whole set.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StorageError;
use crate::models::{NewReaction, Reaction};

#[derive(Clone, Copy)]
enum Target {
    Post,
    Comment,
}

impl Target {
    fn column(self) -> &'static str {
        match self {
            Target::Post => "post_id",
            Target::Comment => "comment_id",
        }
    }
}

#[derive(Clone)]
pub struct ReactionRepository {
    pool: SqlitePool,
}

impl ReactionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn replace_for_post(
        &self,
        post_id: i64,
        reactions: &[NewReaction],
    ) -> Result<Vec<Reaction>, StorageError> {
        self.replace(Target::Post, post_id, reactions).await?;
        self.list_by_post(post_id).await
    }

    pub async fn replace_for_comment(
        &self,
        comment_id: i64,
        reactions: &[NewReaction],
    ) -> Result<Vec<Reaction>, StorageError> {
        self.replace(Target::Comment, comment_id, reactions).await?;
        self.list_by_comment(comment_id).await
    }

    pub async fn list_by_post(&self, post_id: i64) -> Result<Vec<Reaction>, StorageError> {
        self.list(Target::Post, post_id).await
    }

    pub async fn list_by_comment(&self, comment_id: i64) -> Result<Vec<Reaction>, StorageError> {
        self.list(Target::Comment, comment_id).await
    }

    async fn replace(
        &self,
        target: Target,
        target_id: i64,
        reactions: &[NewReaction],
    ) -> Result<(), StorageError> {
        let column = target.column();
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        sqlx::query(&format!("DELETE FROM reactions WHERE {} = ?", column))
            .bind(target_id)
            .execute(&mut *tx)
            .await?;

        let insert = format!(
            "INSERT INTO reactions ({}, reaction_type, count, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
            column
        );
        for reaction in reactions {
            sqlx::query(&insert)
                .bind(target_id)
                .bind(&reaction.reaction_type)
                .bind(reaction.count)
                .bind(now)
                .bind(now)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        debug!(target = column, target_id, count = reactions.len(), "Replaced reactions");
        Ok(())
    }

    async fn list(&self, target: Target, target_id: i64) -> Result<Vec<Reaction>, StorageError> {
        let sql = format!(
            "SELECT * FROM reactions WHERE {} = ? ORDER BY count DESC, id",
            target.column()
        );
        let reactions = sqlx::query_as::<_, Reaction>(&sql)
            .bind(target_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(reactions)
    }
}
