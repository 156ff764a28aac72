//! TelegramDataCollector: registers channels and stores what a [`ChannelSource`] returns.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use storage::{Channel, Comment, NewComment, NewPost, NewReaction, Post, Storage};
use tga_core::normalize_channel_username;
use tracing::{info, instrument, warn};

use crate::error::CollectorError;
use crate::source::ChannelSource;
use crate::types::{ChannelInfo, SourceMessage};

/// Posts whose replies are collected in one run.
pub const COMMENT_POSTS_PER_RUN: usize = 10;
/// Replies collected per post.
pub const COMMENTS_PER_POST: usize = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CollectionSummary {
    pub posts: usize,
    pub comments: usize,
}

#[derive(Clone)]
pub struct TelegramDataCollector {
    pub(crate) storage: Storage,
    source: Arc<dyn ChannelSource>,
}

impl TelegramDataCollector {
    pub fn new(storage: Storage, source: Arc<dyn ChannelSource>) -> Self {
        Self { storage, source }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Channel metadata from the source; `username` may carry `@` or a t.me link.
    #[instrument(skip(self))]
    pub async fn get_channel_info(&self, username: &str) -> Result<ChannelInfo, CollectorError> {
        let username = normalize(username)?;
        self.source.channel_info(&username).await
    }

    /// Fetches metadata and stores the channel, refreshing it when already known.
    pub async fn register_channel(&self, username: &str) -> Result<Channel, CollectorError> {
        let info = self.get_channel_info(username).await?;
        let channel = self.storage.channels().upsert(&info.to_new_channel()).await?;
        info!(channel_id = channel.id, username = ?channel.username, "Channel registered");
        Ok(channel)
    }

    /// Stored channel with this username, otherwise a freshly registered one.
    pub async fn resolve_channel(&self, username: &str) -> Result<Channel, CollectorError> {
        let normalized = normalize(username)?;
        if let Some(channel) = self.storage.channels().get_by_username(&normalized).await? {
            return Ok(channel);
        }
        self.register_channel(&normalized).await
    }

    /// Collects up to `limit` newest posts (older than `offset_date` when given).
    /// Posts without text are skipped.
    #[instrument(skip(self, channel), fields(channel_id = channel.id))]
    pub async fn collect_posts(
        &self,
        channel: &Channel,
        limit: usize,
        offset_date: Option<DateTime<Utc>>,
    ) -> Result<Vec<Post>, CollectorError> {
        let username = channel_username(channel)?;
        let messages = self.source.fetch_posts(&username, limit, offset_date).await?;

        let mut posts = Vec::with_capacity(messages.len());
        for message in messages.iter().filter(|m| m.has_text()) {
            posts.push(self.store_post(channel.id, message).await?);
        }

        info!(
            username = %username,
            fetched = messages.len(),
            stored = posts.len(),
            "Collected posts"
        );
        Ok(posts)
    }

    /// Collects up to `limit` replies to `post`, storing their authors as users.
    #[instrument(skip(self, channel, post), fields(channel_id = channel.id, post_id = post.id))]
    pub async fn collect_comments(
        &self,
        channel: &Channel,
        post: &Post,
        limit: usize,
    ) -> Result<Vec<Comment>, CollectorError> {
        let username = channel_username(channel)?;
        let replies = self
            .source
            .fetch_replies(&username, post.tg_id, limit)
            .await?;

        let mut comments = Vec::with_capacity(replies.len());
        for reply in replies.iter().filter(|m| m.has_text()) {
            comments.push(self.store_comment(post, reply).await?);
        }

        info!(post_tg_id = post.tg_id, stored = comments.len(), "Collected comments");
        Ok(comments)
    }

    /// Posts first, then replies for the first [`COMMENT_POSTS_PER_RUN`] posts.
    ///
    /// A source without reply support only yields posts.
    pub async fn collect_channel(
        &self,
        channel: &Channel,
        limit: usize,
    ) -> Result<CollectionSummary, CollectorError> {
        let posts = self.collect_posts(channel, limit, None).await?;
        let mut summary = CollectionSummary {
            posts: posts.len(),
            comments: 0,
        };

        for post in posts.iter().take(COMMENT_POSTS_PER_RUN) {
            match self.collect_comments(channel, post, COMMENTS_PER_POST).await {
                Ok(comments) => summary.comments += comments.len(),
                Err(e) if e.is_unsupported() => {
                    info!(reason = %e, "Skipping comment collection");
                    break;
                }
                Err(e) => {
                    warn!(post_id = post.id, error = %e, "Failed to collect comments");
                }
            }
        }

        info!(
            channel_id = channel.id,
            posts = summary.posts,
            comments = summary.comments,
            "Channel collection finished"
        );
        Ok(summary)
    }

    pub(crate) async fn store_post(
        &self,
        channel_id: i64,
        message: &SourceMessage,
    ) -> Result<Post, CollectorError> {
        let post = self
            .storage
            .posts()
            .upsert(&NewPost {
                tg_id: message.tg_id,
                channel_id,
                content: message.text.clone(),
                posted_at: message.date,
                views: message.views,
                forwards: message.forwards,
            })
            .await?;

        if !message.reactions.is_empty() {
            let reactions: Vec<NewReaction> =
                message.reactions.iter().map(|r| r.to_new_reaction()).collect();
            self.storage
                .reactions()
                .replace_for_post(post.id, &reactions)
                .await?;
        }
        Ok(post)
    }

    pub(crate) async fn store_comment(
        &self,
        post: &Post,
        message: &SourceMessage,
    ) -> Result<Comment, CollectorError> {
        let user_id = match &message.author {
            Some(author) => Some(self.storage.users().upsert(&author.to_new_user()).await?.id),
            None => None,
        };

        let comment = self
            .storage
            .comments()
            .upsert(&NewComment {
                tg_id: message.tg_id,
                post_id: post.id,
                user_id,
                content: message.text.clone(),
                commented_at: message.date,
            })
            .await?;

        if !message.reactions.is_empty() {
            let reactions: Vec<NewReaction> =
                message.reactions.iter().map(|r| r.to_new_reaction()).collect();
            self.storage
                .reactions()
                .replace_for_comment(comment.id, &reactions)
                .await?;
        }
        Ok(comment)
    }
}

fn normalize(username: &str) -> Result<String, CollectorError> {
    normalize_channel_username(username)
        .ok_or_else(|| CollectorError::InvalidUsername(username.to_string()))
}

fn channel_username(channel: &Channel) -> Result<String, CollectorError> {
    channel
        .username
        .clone()
        .ok_or_else(|| CollectorError::InvalidUsername(format!("channel {} has no username", channel.id)))
}
