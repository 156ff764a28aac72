use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A channel post. `tg_id` is the message id inside its channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub tg_id: i64,
    pub channel_id: i64,
    pub content: String,
    pub posted_at: DateTime<Utc>,
    pub views: i64,
    pub forwards: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub tg_id: i64,
    pub channel_id: i64,
    pub content: String,
    pub posted_at: DateTime<Utc>,
    pub views: i64,
    pub forwards: i64,
}
