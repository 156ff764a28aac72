//! HTTP request handlers.

mod analytics;
mod channels;
mod posts;

pub use analytics::{
    analyze_channel, analyze_post, create_survey, generate_content_plan, list_analyses,
    list_content_plans, list_surveys,
};
pub use channels::{add_channel, collect_channel, get_channel, list_channel_posts, list_channels};
pub use posts::{get_post, list_post_comments};

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use storage::Channel;

use crate::error::ApiError;
use crate::response::{HealthResponse, RootResponse};
use crate::state::AppState;

/// `limit`/`offset` query parameters; each listing picks its own default limit.
#[derive(Debug, Default, Deserialize)]
pub struct Pagination {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Pagination {
    pub(crate) fn resolve(&self, default_limit: i64) -> Result<(i64, i64), ApiError> {
        let limit = self.limit.unwrap_or(default_limit);
        let offset = self.offset.unwrap_or(0);
        if limit < 0 || offset < 0 {
            return Err(ApiError::BadRequest(
                "limit and offset must not be negative".to_string(),
            ));
        }
        Ok((limit, offset))
    }
}

pub async fn root(State(state): State<Arc<AppState>>) -> Json<RootResponse> {
    Json(RootResponse {
        app_name: state.config.base.app_name.clone(),
        version: state.config.base.app_version.clone(),
        status: "running",
    })
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

pub(crate) async fn load_channel(state: &AppState, id: i64) -> Result<Channel, ApiError> {
    state
        .storage
        .channels()
        .get(id)
        .await?
        .ok_or_else(|| ApiError::channel_not_found(id))
}
