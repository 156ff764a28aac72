//! # analysis
//!
//! Turns stored channel data into LLM analytics and persists the results.
//!
//! - [`AnalysisService::analyze_channel_content`] – topics, top posts, sentiment, ideas
//! - [`AnalysisService::generate_content_plan`] – day-by-day plan, one row per day
//! - [`AnalysisService::analyze_post_performance`] – review of a single post
//! - [`AnalysisService::generate_survey`] – audience survey draft

mod error;
mod json_reply;
mod payload;
mod service;

pub use error::AnalysisError;
pub use json_reply::parse_json_reply;
pub use payload::engagement_score;
pub use service::{
    AnalysisService, AnalysisSettings, GeneratedPlan, GeneratedSurvey, MAX_PLAN_DAYS,
};
