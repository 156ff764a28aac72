use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One day of a generated content plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContentPlan {
    pub id: i64,
    pub channel_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub planned_date: Option<DateTime<Utc>>,
    /// JSON text of the day entry as returned by the model.
    pub content: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewContentPlan {
    pub channel_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub planned_date: Option<DateTime<Utc>>,
    pub content: Value,
    pub status: String,
}
