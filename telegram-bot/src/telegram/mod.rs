//! Telegram transport: teloxide adapters, the Bot implementation, channel-update mapping and
//! the dispatcher.

mod adapters;
mod bot_adapter;
mod ingest;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use ingest::{
    channel_info_from_chat, discussion_target, reaction_from, reactions_from, source_message,
};
pub use runner::run_dispatcher;
