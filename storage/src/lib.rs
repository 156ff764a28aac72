//! Storage crate: SQLite persistence for channels, posts, comments and generated analytics.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – Row models and insert payloads
//! - [`sqlite_pool`] – SqlitePoolManager
//! - [`schema`] – Table creation
//! - `*_repo` – one repository per table
//! - [`storage`] – `Storage`, the aggregate handed to services

mod analysis_repo;
mod channel_repo;
mod comment_repo;
mod content_plan_repo;
mod error;
mod models;
mod post_repo;
mod reaction_repo;
mod schema;
mod sqlite_pool;
mod storage;
mod survey_repo;
mod user_repo;

pub use analysis_repo::AnalysisRepository;
pub use channel_repo::ChannelRepository;
pub use comment_repo::CommentRepository;
pub use content_plan_repo::ContentPlanRepository;
pub use error::StorageError;
pub use models::{
    Analysis, AnalysisQuery, AnalysisType, Channel, Comment, ContentPlan, NewAnalysis, NewChannel,
    NewComment, NewContentPlan, NewPost, NewReaction, NewSurvey, NewUser, Post, Reaction, Survey,
    User, STATUS_DRAFT,
};
pub use post_repo::PostRepository;
pub use reaction_repo::ReactionRepository;
pub use schema::init_schema;
pub use sqlite_pool::SqlitePoolManager;
pub use storage::Storage;
pub use survey_repo::SurveyRepository;
pub use user_repo::UserRepository;
