//! # Telegram bot
//!
//! Menu dialog for channel analytics plus live ingestion of channel updates.
//!
//! - [`core`] – transport-agnostic Handler, Bot and Message
//! - [`chain`] – [`HandlerChain`] running before → handle → after
//! - [`dialog`] – dialog states and the pure transition function
//! - [`actions`] – confirmed actions on top of the collector and the analysis service
//! - [`telegram`] – teloxide adapters and [`run_dispatcher`]

pub mod actions;
pub mod chain;
pub mod core;
pub mod dialog;
pub mod handlers;
pub mod telegram;
pub mod texts;

use std::sync::Arc;

pub use actions::{ActionError, AnalyticsActions, ServiceActions};
pub use chain::HandlerChain;
pub use core::{
    Bot, BotError, Chat, Handler, HandlerResponse, Message, ReplyKeyboard, Result,
    ToCoreMessage, ToCoreUser, User,
};
pub use dialog::{DialogState, DialogStore, PendingAction};
pub use handlers::{DialogHandler, LoggingHandler};
pub use telegram::{run_dispatcher, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};

/// Logging first, then the dialog.
pub fn build_handler_chain(bot: Arc<dyn Bot>, actions: Arc<dyn AnalyticsActions>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(DialogHandler::new(bot, actions, DialogStore::new())))
}
