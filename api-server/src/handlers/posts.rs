use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use super::Pagination;
use crate::error::ApiError;
use crate::extract::{ApiPath, ApiQuery};
use crate::response::{CommentsResponse, PostDetailResponse};
use crate::state::AppState;

const DEFAULT_COMMENTS_LIMIT: i64 = 50;

/// A post with all of its comments and reactions.
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<PostDetailResponse>, ApiError> {
    let post = state
        .storage
        .posts()
        .get(id)
        .await?
        .ok_or_else(|| ApiError::post_not_found(id))?;
    let comments = state.storage.comments().list_by_post(post.id, None, 0).await?;
    let reactions = state.storage.reactions().list_by_post(post.id).await?;

    Ok(Json(PostDetailResponse {
        post,
        comments,
        reactions,
    }))
}

pub async fn list_post_comments(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(page): ApiQuery<Pagination>,
) -> Result<Json<CommentsResponse>, ApiError> {
    let (limit, offset) = page.resolve(DEFAULT_COMMENTS_LIMIT)?;
    let comments = state
        .storage
        .comments()
        .list_by_post(id, Some(limit), offset)
        .await?;
    Ok(Json(CommentsResponse {
        total: comments.len(),
        comments,
    }))
}
