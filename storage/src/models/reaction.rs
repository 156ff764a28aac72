use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregated count of one reaction kind on a post or a comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Reaction {
    pub id: i64,
    pub post_id: Option<i64>,
    pub comment_id: Option<i64>,
    pub reaction_type: String,
    pub count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReaction {
    /// Emoji, `custom_<id>` for custom emoji, or `paid`.
    pub reaction_type: String,
    pub count: i64,
}

impl NewReaction {
    pub fn new(reaction_type: impl Into<String>, count: i64) -> Self {
        Self {
            reaction_type: reaction_type.into(),
            count,
        }
    }
}
