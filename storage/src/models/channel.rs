use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked Telegram channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Channel {
    pub id: i64,
    pub tg_id: i64,
    pub username: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub member_count: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Channel {
    /// `@username` when known, otherwise the title, otherwise the Telegram id.
    pub fn display_name(&self) -> String {
        match (&self.username, &self.title) {
            (Some(username), _) => format!("@{}", username),
            (None, Some(title)) => title.clone(),
            (None, None) => self.tg_id.to_string(),
        }
    }
}

/// Channel metadata to insert or refresh. `None` fields keep the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewChannel {
    pub tg_id: i64,
    pub username: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub member_count: Option<i64>,
}
