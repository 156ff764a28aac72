//! Row models for every table plus the insert payloads repositories accept.

mod analysis;
mod channel;
mod comment;
mod content_plan;
mod post;
mod reaction;
mod survey;
mod user;

pub use analysis::{Analysis, AnalysisQuery, AnalysisType, NewAnalysis};
pub use channel::{Channel, NewChannel};
pub use comment::{Comment, NewComment};
pub use content_plan::{ContentPlan, NewContentPlan};
pub use post::{NewPost, Post};
pub use reaction::{NewReaction, Reaction};
pub use survey::{NewSurvey, Survey};
pub use user::{NewUser, User};

/// Status given to generated plans and surveys until someone publishes them.
pub const STATUS_DRAFT: &str = "draft";
