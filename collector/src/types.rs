//! Source-neutral shapes of what a channel source returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storage::{NewChannel, NewReaction, NewUser};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelInfo {
    pub tg_id: i64,
    pub username: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub member_count: Option<i64>,
}

impl ChannelInfo {
    pub fn to_new_channel(&self) -> NewChannel {
        NewChannel {
            tg_id: self.tg_id,
            username: self.username.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            member_count: self.member_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUser {
    pub tg_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl SourceUser {
    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            tg_id: self.tg_id,
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReactionKind {
    Emoji(String),
    /// Custom emoji document id.
    CustomEmoji(String),
    Paid,
}

impl ReactionKind {
    /// Stored `reaction_type`: the emoji, `custom_<id>` or `paid`.
    pub fn as_reaction_type(&self) -> String {
        match self {
            ReactionKind::Emoji(emoji) => emoji.clone(),
            ReactionKind::CustomEmoji(id) => format!("custom_{}", id),
            ReactionKind::Paid => "paid".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceReaction {
    pub kind: ReactionKind,
    pub count: i64,
}

impl SourceReaction {
    pub fn new(kind: ReactionKind, count: i64) -> Self {
        Self { kind, count }
    }

    pub fn to_new_reaction(&self) -> NewReaction {
        NewReaction::new(self.kind.as_reaction_type(), self.count)
    }
}

/// A channel post or a discussion reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceMessage {
    /// Message id inside its chat.
    pub tg_id: i64,
    pub date: DateTime<Utc>,
    pub text: String,
    pub views: i64,
    pub forwards: i64,
    pub reactions: Vec<SourceReaction>,
    pub author: Option<SourceUser>,
}

impl SourceMessage {
    pub fn new(tg_id: i64, date: DateTime<Utc>, text: impl Into<String>) -> Self {
        Self {
            tg_id,
            date,
            text: text.into(),
            views: 0,
            forwards: 0,
            reactions: Vec::new(),
            author: None,
        }
    }

    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}
