//! The [`ChannelSource`] port and a composite of two sources.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::CollectorError;
use crate::types::{ChannelInfo, SourceMessage};

/// Reads channel data from Telegram. Usernames are passed without `@`.
///
/// Operations a source cannot serve return [`CollectorError::Unsupported`].
#[async_trait]
pub trait ChannelSource: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    async fn channel_info(&self, username: &str) -> Result<ChannelInfo, CollectorError> {
        let _ = username;
        Err(CollectorError::Unsupported {
            source_name: self.name(),
            operation: "channel metadata",
        })
    }

    /// Newest posts first; only posts dated strictly before `offset_date` when given.
    async fn fetch_posts(
        &self,
        username: &str,
        limit: usize,
        offset_date: Option<DateTime<Utc>>,
    ) -> Result<Vec<SourceMessage>, CollectorError> {
        let _ = (username, limit, offset_date);
        Err(CollectorError::Unsupported {
            source_name: self.name(),
            operation: "channel history",
        })
    }

    /// Discussion replies to the post `post_tg_id`.
    async fn fetch_replies(
        &self,
        username: &str,
        post_tg_id: i64,
        limit: usize,
    ) -> Result<Vec<SourceMessage>, CollectorError> {
        let _ = (username, post_tg_id, limit);
        Err(CollectorError::Unsupported {
            source_name: self.name(),
            operation: "post replies",
        })
    }
}

/// Metadata from one source, posts and replies from another.
pub struct CompositeSource {
    metadata: Arc<dyn ChannelSource>,
    history: Arc<dyn ChannelSource>,
}

impl CompositeSource {
    pub fn new(metadata: Arc<dyn ChannelSource>, history: Arc<dyn ChannelSource>) -> Self {
        Self { metadata, history }
    }
}

#[async_trait]
impl ChannelSource for CompositeSource {
    fn name(&self) -> &'static str {
        "composite"
    }

    async fn channel_info(&self, username: &str) -> Result<ChannelInfo, CollectorError> {
        self.metadata.channel_info(username).await
    }

    async fn fetch_posts(
        &self,
        username: &str,
        limit: usize,
        offset_date: Option<DateTime<Utc>>,
    ) -> Result<Vec<SourceMessage>, CollectorError> {
        self.history.fetch_posts(username, limit, offset_date).await
    }

    async fn fetch_replies(
        &self,
        username: &str,
        post_tg_id: i64,
        limit: usize,
    ) -> Result<Vec<SourceMessage>, CollectorError> {
        self.history.fetch_replies(username, post_tg_id, limit).await
    }
}
