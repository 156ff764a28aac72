//! Live ingestion of updates the bot receives: channel posts, discussion comments,
//! reaction counts.

use storage::{Comment, NewReaction, Post, Reaction};
use tracing::{debug, info};

use crate::collector::TelegramDataCollector;
use crate::error::CollectorError;
use crate::types::{ChannelInfo, SourceMessage, SourceReaction};

impl TelegramDataCollector {
    /// Stores a post published in a channel the bot is a member of.
    /// Returns `None` for posts without text.
    pub async fn ingest_channel_post(
        &self,
        channel: &ChannelInfo,
        message: &SourceMessage,
    ) -> Result<Option<Post>, CollectorError> {
        if !message.has_text() {
            debug!(channel_tg_id = channel.tg_id, tg_id = message.tg_id, "Post without text ignored");
            return Ok(None);
        }

        let stored_channel = self.storage.channels().upsert(&channel.to_new_channel()).await?;
        let post = self.store_post(stored_channel.id, message).await?;
        info!(channel_id = stored_channel.id, post_id = post.id, "Ingested channel post");
        Ok(Some(post))
    }

    /// Stores a discussion comment on the channel post `post_tg_id`.
    /// Returns `None` when the channel or post is unknown, or the comment has no text.
    pub async fn ingest_comment(
        &self,
        channel_tg_id: i64,
        post_tg_id: i64,
        message: &SourceMessage,
    ) -> Result<Option<Comment>, CollectorError> {
        if !message.has_text() {
            return Ok(None);
        }
        let Some(post) = self.find_post(channel_tg_id, post_tg_id).await? else {
            debug!(channel_tg_id, post_tg_id, "Comment on unknown post ignored");
            return Ok(None);
        };

        let comment = self.store_comment(&post, message).await?;
        info!(post_id = post.id, comment_id = comment.id, "Ingested comment");
        Ok(Some(comment))
    }

    /// Replaces the reaction counts of a known post.
    pub async fn ingest_post_reactions(
        &self,
        channel_tg_id: i64,
        post_tg_id: i64,
        reactions: &[SourceReaction],
    ) -> Result<Option<Vec<Reaction>>, CollectorError> {
        let Some(post) = self.find_post(channel_tg_id, post_tg_id).await? else {
            debug!(channel_tg_id, post_tg_id, "Reactions on unknown post ignored");
            return Ok(None);
        };

        let new_reactions: Vec<NewReaction> =
            reactions.iter().map(|r| r.to_new_reaction()).collect();
        let stored = self
            .storage
            .reactions()
            .replace_for_post(post.id, &new_reactions)
            .await?;
        debug!(post_id = post.id, kinds = stored.len(), "Ingested reaction counts");
        Ok(Some(stored))
    }

    async fn find_post(
        &self,
        channel_tg_id: i64,
        post_tg_id: i64,
    ) -> Result<Option<Post>, CollectorError> {
        let Some(channel) = self.storage.channels().get_by_tg_id(channel_tg_id).await? else {
            return Ok(None);
        };
        Ok(self.storage.posts().get_by_tg_id(channel.id, post_tg_id).await?)
    }
}
