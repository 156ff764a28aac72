//! teloxide → core conversions for the handler chain.

use crate::core::{Chat, Message, ToCoreMessage, ToCoreUser, User};

/// Converts a Telegram user to a core user.
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Converts a Telegram message to a core message. Captions count as content.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let msg = self.0;
        Message {
            id: msg.id.0.to_string(),
            user: msg
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or(User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: msg.chat.id.0,
                chat_type: chat_type(&msg.chat).to_string(),
            },
            content: msg.text().or(msg.caption()).unwrap_or_default().to_string(),
            created_at: msg.date,
            reply_to_message_id: msg.reply_to_message().map(|m| m.id.0.to_string()),
        }
    }
}

pub(crate) fn chat_type(chat: &teloxide::types::Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_channel() {
        "channel"
    } else if chat.is_supergroup() {
        "supergroup"
    } else {
        "group"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
            language_code: Some("ru".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("testuser".to_string()));
        assert_eq!(core_user.first_name, Some("Test".to_string()));
        assert_eq!(core_user.last_name, Some("User".to_string()));
    }

    #[test]
    fn test_private_message_to_core() {
        let json = r#"{
            "message_id": 10,
            "date": 1700000000,
            "chat": {"id": 555, "first_name": "Ann", "type": "private"},
            "from": {"id": 555, "is_bot": false, "first_name": "Ann", "username": "ann"},
            "text": "/menu"
        }"#;
        let msg: teloxide::types::Message = serde_json::from_str(json).unwrap();

        let core = TelegramMessageWrapper(&msg).to_core();

        assert_eq!(core.id, "10");
        assert_eq!(core.user.id, 555);
        assert_eq!(core.user.username.as_deref(), Some("ann"));
        assert!(core.chat.is_private());
        assert_eq!(core.content, "/menu");
        assert_eq!(core.created_at.timestamp(), 1_700_000_000);
        assert!(core.reply_to_message_id.is_none());
    }
}
