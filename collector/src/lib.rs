//! # collector
//!
//! Gathers channel data from Telegram into storage.
//!
//! - [`ChannelSource`] – port for reading channel metadata, history and replies
//! - [`BotApiSource`] – metadata through the Bot API (`getChat`, `getChatMemberCount`)
//! - [`WebPreviewSource`] – history from the public `t.me/s/<channel>` preview
//! - [`CompositeSource`] – metadata from one source, history from another
//! - [`TelegramDataCollector`] – registers channels, collects posts/comments, ingests live updates

mod bot_api;
mod collector;
mod error;
mod ingest;
mod source;
mod types;
mod web_preview;

pub use bot_api::BotApiSource;
pub use collector::{
    CollectionSummary, TelegramDataCollector, COMMENTS_PER_POST, COMMENT_POSTS_PER_RUN,
};
pub use error::CollectorError;
pub use source::{ChannelSource, CompositeSource};
pub use types::{ChannelInfo, ReactionKind, SourceMessage, SourceReaction, SourceUser};
pub use web_preview::{parse_compact_count, WebPreviewSource};
