//! Maps channel updates to collector inputs.

use collector::{ChannelInfo, ReactionKind, SourceMessage, SourceReaction, SourceUser};
use teloxide::types::{
    Chat, Message, MessageOrigin, MessageReactionCountUpdated, ReactionCount, ReactionType,
};

pub fn channel_info_from_chat(chat: &Chat) -> ChannelInfo {
    ChannelInfo {
        tg_id: chat.id.0,
        username: chat.username().map(str::to_string),
        title: chat.title().map(str::to_string),
        description: None,
        member_count: None,
    }
}

/// Text or caption of the message; views and forwards are not part of Bot API updates.
pub fn source_message(msg: &Message) -> SourceMessage {
    let text = msg.text().or(msg.caption()).unwrap_or_default();
    let mut source = SourceMessage::new(msg.id.0 as i64, msg.date, text);
    source.author = msg.from.as_ref().map(|u| SourceUser {
        tg_id: u.id.0 as i64,
        username: u.username.clone(),
        first_name: Some(u.first_name.clone()),
        last_name: u.last_name.clone(),
    });
    source
}

/// `(channel tg id, post tg id)` when `msg` replies to the automatic forward of a channel post
/// in the linked discussion group.
pub fn discussion_target(msg: &Message) -> Option<(i64, i64)> {
    let parent = msg.reply_to_message()?;
    if !parent.is_automatic_forward() {
        return None;
    }
    match parent.forward_origin()? {
        MessageOrigin::Channel {
            chat, message_id, ..
        } => Some((chat.id.0, message_id.0 as i64)),
        _ => None,
    }
}

pub fn reaction_from(count: &ReactionCount) -> SourceReaction {
    let kind = match &count.r#type {
        ReactionType::Emoji { emoji } => ReactionKind::Emoji(emoji.clone()),
        ReactionType::CustomEmoji { custom_emoji_id } => {
            ReactionKind::CustomEmoji(custom_emoji_id.0.clone())
        }
        ReactionType::Paid => ReactionKind::Paid,
    };
    SourceReaction::new(kind, i64::try_from(count.total_count).unwrap_or(i64::MAX))
}

pub fn reactions_from(update: &MessageReactionCountUpdated) -> Vec<SourceReaction> {
    update.reactions.iter().map(reaction_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHANNEL: &str = r#"{"id": -1001234, "title": "Rust News", "username": "rustnews", "type": "channel"}"#;

    fn parse(json: &str) -> Message {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_channel_post_mapping() {
        let msg = parse(&format!(
            r#"{{"message_id": 7, "date": 1700000000, "chat": {c}, "sender_chat": {c}, "text": "Новый релиз"}}"#,
            c = CHANNEL
        ));

        let info = channel_info_from_chat(&msg.chat);
        assert_eq!(info.tg_id, -1001234);
        assert_eq!(info.username.as_deref(), Some("rustnews"));
        assert_eq!(info.title.as_deref(), Some("Rust News"));

        let source = source_message(&msg);
        assert_eq!(source.tg_id, 7);
        assert_eq!(source.text, "Новый релиз");
        assert_eq!(source.date.timestamp(), 1_700_000_000);
        assert!(source.author.is_none());
        assert!(discussion_target(&msg).is_none());
    }

    #[test]
    fn test_discussion_comment_target() {
        let group = r#"{"id": -1009999, "title": "Rust chat", "type": "supergroup"}"#;
        let json = format!(
            r#"{{
                "message_id": 55,
                "date": 1700000100,
                "chat": {g},
                "from": {{"id": 42, "is_bot": false, "first_name": "Ann", "username": "ann"}},
                "text": "Отличный пост",
                "reply_to_message": {{
                    "message_id": 40,
                    "date": 1700000001,
                    "chat": {g},
                    "sender_chat": {c},
                    "is_automatic_forward": true,
                    "forward_origin": {{"type": "channel", "date": 1700000000, "chat": {c}, "message_id": 7}},
                    "text": "Новый релиз"
                }}
            }}"#,
            g = group,
            c = CHANNEL
        );
        let msg = parse(&json);

        assert_eq!(discussion_target(&msg), Some((-1001234, 7)));
        let source = source_message(&msg);
        let author = source.author.unwrap();
        assert_eq!(author.tg_id, 42);
        assert_eq!(author.username.as_deref(), Some("ann"));
    }

    #[test]
    fn test_reaction_counts_mapping() {
        let json = format!(
            r#"{{
                "chat": {c},
                "message_id": 7,
                "date": 1700000200,
                "reactions": [
                    {{"type": {{"type": "emoji", "emoji": "🔥"}}, "total_count": 5}},
                    {{"type": {{"type": "custom_emoji", "custom_emoji_id": "5368"}}, "total_count": 1}},
                    {{"type": {{"type": "paid"}}, "total_count": 2}}
                ]
            }}"#,
            c = CHANNEL
        );
        let update: MessageReactionCountUpdated = serde_json::from_str(&json).unwrap();

        let reactions = reactions_from(&update);
        assert_eq!(
            reactions,
            vec![
                SourceReaction::new(ReactionKind::Emoji("🔥".to_string()), 5),
                SourceReaction::new(ReactionKind::CustomEmoji("5368".to_string()), 1),
                SourceReaction::new(ReactionKind::Paid, 2),
            ]
        );
    }
}
