//! Wraps teloxide::Bot and implements [`crate::core::Bot`].

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId, KeyboardButton, KeyboardMarkup, ReplyMarkup};

use crate::core::{Bot as CoreBot, BotError, Chat, ReplyKeyboard, Result};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

/// Button rows become a resized one-time keyboard.
pub(crate) fn reply_markup(keyboard: &ReplyKeyboard) -> ReplyMarkup {
    match keyboard {
        ReplyKeyboard::Buttons(rows) => ReplyMarkup::Keyboard(
            KeyboardMarkup::new(
                rows.iter()
                    .map(|row| row.iter().map(KeyboardButton::new).collect::<Vec<_>>()),
            )
            .resize_keyboard()
            .one_time_keyboard(),
        ),
        ReplyKeyboard::Remove => ReplyMarkup::kb_remove(),
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &ReplyKeyboard,
    ) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(reply_markup(keyboard))
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
