use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reply to a post in the channel's discussion group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub tg_id: i64,
    pub post_id: i64,
    pub user_id: Option<i64>,
    pub content: String,
    pub commented_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub tg_id: i64,
    pub post_id: i64,
    /// Database id of the author (`users.id`), not the Telegram id.
    pub user_id: Option<i64>,
    pub content: String,
    pub commented_at: DateTime<Utc>,
}
