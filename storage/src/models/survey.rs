use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Survey {
    pub id: i64,
    pub channel_id: i64,
    pub title: String,
    pub description: Option<String>,
    /// JSON array of `{question_text, question_type, options}`.
    pub questions: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSurvey {
    pub channel_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub questions: Value,
    pub status: String,
}
