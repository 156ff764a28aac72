//! Endpoints backed by the analysis service.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use storage::AnalysisQuery;

use super::{load_channel, Pagination};
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::response::{
    AnalysesResponse, AnalysisItem, AnalysisResponse, ContentPlanResponse, ContentPlansResponse,
    SurveyResponse, SurveysResponse,
};
use crate::state::AppState;

const DEFAULT_PLAN_DAYS: i64 = 7;
const DEFAULT_HISTORY_LIMIT: i64 = 10;

#[derive(Debug, Default, Deserialize)]
pub struct ContentPlanRequest {
    pub days: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalysesFilter {
    pub channel_id: Option<i64>,
    pub post_id: Option<i64>,
    pub analysis_type: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub async fn analyze_channel(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    load_channel(&state, id).await?;
    let analysis = state.analysis.analyze_channel_content(id).await?;
    Ok(Json(AnalysisResponse {
        success: true,
        analysis,
    }))
}

pub async fn generate_content_plan(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
    body: Option<ApiJson<ContentPlanRequest>>,
) -> Result<Json<ContentPlanResponse>, ApiError> {
    load_channel(&state, id).await?;
    let days = body
        .and_then(|ApiJson(request)| request.days)
        .unwrap_or(DEFAULT_PLAN_DAYS);
    let days = u32::try_from(days)
        .map_err(|_| ApiError::BadRequest(format!("Invalid number of days: {}", days)))?;

    let generated = state.analysis.generate_content_plan(id, days).await?;
    Ok(Json(ContentPlanResponse {
        success: true,
        content_plan: generated.plan,
    }))
}

pub async fn list_content_plans(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(page): ApiQuery<Pagination>,
) -> Result<Json<ContentPlansResponse>, ApiError> {
    let (limit, offset) = page.resolve(DEFAULT_HISTORY_LIMIT)?;
    let content_plans = state
        .storage
        .content_plans()
        .list_by_channel(id, limit, offset)
        .await?;
    Ok(Json(ContentPlansResponse {
        total: content_plans.len(),
        content_plans,
    }))
}

pub async fn analyze_post(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    // PostNotFound from the service maps to 404.
    let analysis = state.analysis.analyze_post_performance(id).await?;
    Ok(Json(AnalysisResponse {
        success: true,
        analysis,
    }))
}

pub async fn create_survey(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<SurveyResponse>, ApiError> {
    load_channel(&state, id).await?;
    let generated = state.analysis.generate_survey(id).await?;
    Ok(Json(SurveyResponse {
        success: true,
        survey: generated.survey,
    }))
}

pub async fn list_surveys(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(page): ApiQuery<Pagination>,
) -> Result<Json<SurveysResponse>, ApiError> {
    let (limit, offset) = page.resolve(DEFAULT_HISTORY_LIMIT)?;
    let surveys = state
        .storage
        .surveys()
        .list_by_channel(id, limit, offset)
        .await?;
    Ok(Json(SurveysResponse {
        total: surveys.len(),
        surveys,
    }))
}

/// Analyses newest first, optionally filtered by channel, post and type.
pub async fn list_analyses(
    State(state): State<Arc<AppState>>,
    ApiQuery(filter): ApiQuery<AnalysesFilter>,
) -> Result<Json<AnalysesResponse>, ApiError> {
    let (limit, offset) = Pagination {
        limit: filter.limit,
        offset: filter.offset,
    }
    .resolve(DEFAULT_HISTORY_LIMIT)?;

    let query = AnalysisQuery {
        channel_id: filter.channel_id,
        post_id: filter.post_id,
        analysis_type: filter.analysis_type,
        limit,
        offset,
    };
    let analyses: Vec<AnalysisItem> = state
        .storage
        .analyses()
        .list(&query)
        .await?
        .into_iter()
        .map(AnalysisItem::from)
        .collect();

    Ok(Json(AnalysesResponse {
        total: analyses.len(),
        analyses,
    }))
}
