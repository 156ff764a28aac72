use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use super::{load_channel, Pagination};
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::response::{
    ChannelAddedResponse, ChannelResponse, ChannelsResponse, MessageResponse, PostsResponse,
};
use crate::state::AppState;

const DEFAULT_POSTS_LIMIT: i64 = 50;
const DEFAULT_COLLECT_LIMIT: usize = 100;

#[derive(Debug, Deserialize)]
pub struct AddChannelRequest {
    pub username: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CollectRequest {
    pub limit: Option<usize>,
}

pub async fn list_channels(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ChannelsResponse>, ApiError> {
    let channels = state.storage.channels().list().await?;
    Ok(Json(ChannelsResponse { channels }))
}

pub async fn add_channel(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<AddChannelRequest>,
) -> Result<Json<ChannelAddedResponse>, ApiError> {
    let username = request
        .username
        .as_deref()
        .map(|u| u.trim().trim_start_matches('@'))
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Username is required".to_string()))?;

    let channel = state.collector()?.register_channel(username).await?;
    info!(channel_id = channel.id, "Channel added through API");
    Ok(Json(ChannelAddedResponse {
        success: true,
        channel,
    }))
}

pub async fn get_channel(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ChannelResponse>, ApiError> {
    let channel = load_channel(&state, id).await?;
    Ok(Json(ChannelResponse { channel }))
}

pub async fn list_channel_posts(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(page): ApiQuery<Pagination>,
) -> Result<Json<PostsResponse>, ApiError> {
    let (limit, offset) = page.resolve(DEFAULT_POSTS_LIMIT)?;
    let posts = state
        .storage
        .posts()
        .list_by_channel(id, limit, offset)
        .await?;
    Ok(Json(PostsResponse {
        total: posts.len(),
        posts,
    }))
}

pub async fn collect_channel(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
    body: Option<ApiJson<CollectRequest>>,
) -> Result<Json<MessageResponse>, ApiError> {
    let channel = load_channel(&state, id).await?;
    let collector = state.collector()?;
    let limit = body
        .and_then(|ApiJson(request)| request.limit)
        .unwrap_or(DEFAULT_COLLECT_LIMIT);

    let summary = collector.collect_channel(&channel, limit).await?;
    Ok(Json(MessageResponse {
        success: true,
        message: format!(
            "Collected {} posts and {} comments from {}",
            summary.posts,
            summary.comments,
            channel.display_name()
        ),
    }))
}
