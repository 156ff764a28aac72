//! Response bodies.

use serde::Serialize;
use serde_json::Value;
use storage::{Analysis, Channel, Comment, ContentPlan, Post, Reaction, Survey};

#[derive(Serialize)]
pub struct RootResponse {
    pub app_name: String,
    pub version: String,
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// UTC, RFC 3339.
    pub timestamp: String,
    pub uptime_secs: u64,
}

#[derive(Serialize)]
pub struct ChannelsResponse {
    pub channels: Vec<Channel>,
}

#[derive(Serialize)]
pub struct ChannelResponse {
    pub channel: Channel,
}

#[derive(Serialize)]
pub struct ChannelAddedResponse {
    pub success: bool,
    pub channel: Channel,
}

/// `total` is the number of rows in this page.
#[derive(Serialize)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct PostDetailResponse {
    pub post: Post,
    pub comments: Vec<Comment>,
    pub reactions: Vec<Reaction>,
}

#[derive(Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub analysis: Value,
}

#[derive(Serialize)]
pub struct ContentPlanResponse {
    pub success: bool,
    pub content_plan: Value,
}

#[derive(Serialize)]
pub struct ContentPlansResponse {
    pub content_plans: Vec<ContentPlan>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct SurveyResponse {
    pub success: bool,
    pub survey: Value,
}

#[derive(Serialize)]
pub struct SurveysResponse {
    pub surveys: Vec<Survey>,
    pub total: usize,
}

/// An analysis with `content` parsed back into JSON.
#[derive(Serialize)]
pub struct AnalysisItem {
    pub id: i64,
    pub channel_id: Option<i64>,
    pub post_id: Option<i64>,
    pub analysis_type: String,
    pub created_at: String,
    pub content: Value,
}

impl From<Analysis> for AnalysisItem {
    fn from(analysis: Analysis) -> Self {
        let content = analysis.content_value();
        Self {
            id: analysis.id,
            channel_id: analysis.channel_id,
            post_id: analysis.post_id,
            analysis_type: analysis.analysis_type,
            created_at: analysis.created_at.to_rfc3339(),
            content,
        }
    }
}

#[derive(Serialize)]
pub struct AnalysesResponse {
    pub analyses: Vec<AnalysisItem>,
    pub total: usize,
}
