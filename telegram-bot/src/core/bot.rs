//! Bot abstraction for sending messages.
//!
//! [`Bot`] is transport-agnostic; [`crate::telegram::TelegramBotAdapter`] implements it via teloxide.

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::types::{Chat, ReplyKeyboard};

/// Sends messages. Implementations map to a transport (e.g. Telegram); tests use a recorder.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a text message with a reply keyboard, or removes the current keyboard.
    async fn send_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &ReplyKeyboard,
    ) -> Result<()>;
}
