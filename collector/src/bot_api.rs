//! Channel metadata through the Bot API.
//!
//! The Bot API does not expose channel history, so only `channel_info` is served.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::Recipient;
use teloxide::{ApiError, RequestError};
use tracing::{info, warn};

use crate::error::CollectorError;
use crate::source::ChannelSource;
use crate::types::ChannelInfo;

#[derive(Clone)]
pub struct BotApiSource {
    bot: Bot,
}

impl BotApiSource {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ChannelSource for BotApiSource {
    fn name(&self) -> &'static str {
        "bot_api"
    }

    async fn channel_info(&self, username: &str) -> Result<ChannelInfo, CollectorError> {
        let recipient = Recipient::ChannelUsername(format!("@{}", username));

        let chat = self
            .bot
            .get_chat(recipient.clone())
            .await
            .map_err(|e| match e {
                RequestError::Api(ApiError::ChatNotFound) => {
                    CollectorError::ChannelNotFound(username.to_string())
                }
                other => CollectorError::Telegram(other.to_string()),
            })?;

        // Member count needs extra rights in some chats; metadata is still useful without it.
        let member_count = match self.bot.get_chat_member_count(recipient).await {
            Ok(count) => Some(i64::from(count)),
            Err(e) => {
                warn!(username = %username, error = %e, "Failed to get member count");
                None
            }
        };

        let info = ChannelInfo {
            tg_id: chat.id.0,
            username: chat
                .username()
                .map(str::to_string)
                .or_else(|| Some(username.to_string())),
            title: chat.title().map(str::to_string),
            description: chat.description().map(str::to_string),
            member_count,
        };
        info!(username = %username, tg_id = info.tg_id, "Fetched channel info");
        Ok(info)
    }
}
