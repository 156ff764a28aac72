use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of LLM analysis stored in the `analyses` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    ChannelContent,
    PostPerformance,
}

impl AnalysisType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::ChannelContent => "channel_content",
            AnalysisType::PostPerformance => "post_performance",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored analysis. `content` is the JSON text produced by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Analysis {
    pub id: i64,
    pub channel_id: Option<i64>,
    pub post_id: Option<i64>,
    pub analysis_type: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Analysis {
    /// Parsed content; falls back to the raw text when it is not valid JSON.
    pub fn content_value(&self) -> Value {
        serde_json::from_str(&self.content).unwrap_or_else(|_| Value::String(self.content.clone()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAnalysis {
    pub channel_id: Option<i64>,
    pub post_id: Option<i64>,
    pub analysis_type: AnalysisType,
    pub content: Value,
}

/// Filters for listing analyses; `None` filters are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisQuery {
    pub channel_id: Option<i64>,
    pub post_id: Option<i64>,
    pub analysis_type: Option<String>,
    pub limit: i64,
    /// Pagination offset (used with limit).
    pub offset: i64,
}

impl Default for AnalysisQuery {
    fn default() -> Self {
        Self {
            channel_id: None,
            post_id: None,
            analysis_type: None,
            limit: 10,
            offset: 0,
        }
    }
}
