//! `Storage`: one pool shared by every repository.

use tracing::info;

use crate::analysis_repo::AnalysisRepository;
use crate::channel_repo::ChannelRepository;
use crate::comment_repo::CommentRepository;
use crate::content_plan_repo::ContentPlanRepository;
use crate::error::StorageError;
use crate::post_repo::PostRepository;
use crate::reaction_repo::ReactionRepository;
use crate::schema::init_schema;
use crate::sqlite_pool::SqlitePoolManager;
use crate::survey_repo::SurveyRepository;
use crate::user_repo::UserRepository;

/// Cheap to clone; all clones share the same pool.
#[derive(Clone)]
pub struct Storage {
    users: UserRepository,
    channels: ChannelRepository,
    posts: PostRepository,
    comments: CommentRepository,
    reactions: ReactionRepository,
    analyses: AnalysisRepository,
    content_plans: ContentPlanRepository,
    surveys: SurveyRepository,
}

impl Storage {
    /// Opens the database and creates missing tables.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        init_schema(pool_manager.pool()).await?;
        info!("Storage ready");
        Ok(Self::from_pool_manager(pool_manager))
    }

    fn from_pool_manager(pool_manager: SqlitePoolManager) -> Self {
        let pool = pool_manager.pool().clone();
        Self {
            users: UserRepository::new(pool.clone()),
            channels: ChannelRepository::new(pool.clone()),
            posts: PostRepository::new(pool.clone()),
            comments: CommentRepository::new(pool.clone()),
            reactions: ReactionRepository::new(pool.clone()),
            analyses: AnalysisRepository::new(pool.clone()),
            content_plans: ContentPlanRepository::new(pool.clone()),
            surveys: SurveyRepository::new(pool),
        }
    }

    pub fn users(&self) -> &UserRepository {
        &self.users
    }

    pub fn channels(&self) -> &ChannelRepository {
        &self.channels
    }

    pub fn posts(&self) -> &PostRepository {
        &self.posts
    }

    pub fn comments(&self) -> &CommentRepository {
        &self.comments
    }

    pub fn reactions(&self) -> &ReactionRepository {
        &self.reactions
    }

    pub fn analyses(&self) -> &AnalysisRepository {
        &self.analyses
    }

    pub fn content_plans(&self) -> &ContentPlanRepository {
        &self.content_plans
    }

    pub fn surveys(&self) -> &SurveyRepository {
        &self.surveys
    }
}
