//! HTTP router setup.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Root route plus every API route under `config.api.prefix`.
pub fn create_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/channels",
            get(handlers::list_channels).post(handlers::add_channel),
        )
        .route("/channels/{id}", get(handlers::get_channel))
        .route("/channels/{id}/posts", get(handlers::list_channel_posts))
        .route("/channels/{id}/collect", post(handlers::collect_channel))
        .route("/channels/{id}/analyze", post(handlers::analyze_channel))
        .route(
            "/channels/{id}/content-plan",
            post(handlers::generate_content_plan),
        )
        .route(
            "/channels/{id}/content-plans",
            get(handlers::list_content_plans),
        )
        .route("/channels/{id}/survey", post(handlers::create_survey))
        .route("/channels/{id}/surveys", get(handlers::list_surveys))
        .route("/posts/{id}", get(handlers::get_post))
        .route("/posts/{id}/comments", get(handlers::list_post_comments))
        .route("/posts/{id}/analyze", post(handlers::analyze_post))
        .route("/analyses", get(handlers::list_analyses));

    let prefix = state.config.api.prefix.clone();
    let router = if prefix.is_empty() {
        api
    } else {
        Router::new().nest(&prefix, api)
    };

    router
        .route("/", get(handlers::root))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
