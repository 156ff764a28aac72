//! Menu dialog driven end to end through the handler chain with a recording bot and stub
//! actions.

use std::sync::{Arc, Mutex};

use analysis::AnalysisError;
use async_trait::async_trait;
use chrono::Utc;
use telegram_bot::{
    build_handler_chain, texts, ActionError, AnalyticsActions, Bot, Chat, HandlerChain,
    HandlerResponse, Message, PendingAction, ReplyKeyboard, User,
};

#[derive(Debug, Clone, PartialEq)]
struct Sent {
    chat_id: i64,
    text: String,
    keyboard: Option<ReplyKeyboard>,
}

#[derive(Default)]
struct RecordingBot {
    sent: Mutex<Vec<Sent>>,
}

impl RecordingBot {
    fn take(&self) -> Vec<Sent> {
        std::mem::take(&mut *self.sent.lock().unwrap())
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> telegram_bot::Result<()> {
        self.sent.lock().unwrap().push(Sent {
            chat_id: chat.id,
            text: text.to_string(),
            keyboard: None,
        });
        Ok(())
    }

    async fn send_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &ReplyKeyboard,
    ) -> telegram_bot::Result<()> {
        self.sent.lock().unwrap().push(Sent {
            chat_id: chat.id,
            text: text.to_string(),
            keyboard: Some(keyboard.clone()),
        });
        Ok(())
    }
}

/// Records performed actions; fails post analysis to exercise the error reply.
#[derive(Default)]
struct StubActions {
    performed: Mutex<Vec<PendingAction>>,
}

#[async_trait]
impl AnalyticsActions for StubActions {
    async fn perform(&self, action: &PendingAction) -> Result<String, ActionError> {
        self.performed.lock().unwrap().push(action.clone());
        match action {
            PendingAction::AnalyzePost { post_id } => {
                Err(AnalysisError::PostNotFound(*post_id).into())
            }
            other => Ok(format!("summary for {}", other.name())),
        }
    }
}

struct Harness {
    bot: Arc<RecordingBot>,
    actions: Arc<StubActions>,
    chain: HandlerChain,
}

fn harness() -> Harness {
    let bot = Arc::new(RecordingBot::default());
    let actions = Arc::new(StubActions::default());
    let chain = build_handler_chain(bot.clone(), actions.clone());
    Harness {
        bot,
        actions,
        chain,
    }
}

fn message(chat_id: i64, user_id: i64, chat_type: &str, content: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: user_id,
            username: None,
            first_name: Some("Ann".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: chat_id,
            chat_type: chat_type.to_string(),
        },
        content: content.to_string(),
        created_at: Utc::now(),
        reply_to_message_id: None,
    }
}

async fn say(h: &Harness, content: &str) -> HandlerResponse {
    h.chain
        .handle(&message(10, 10, "private", content))
        .await
        .unwrap()
}

/// **Test: full channel-analysis dialog: menu → button → username → Да → summary.**
#[tokio::test]
async fn test_channel_analysis_dialog() {
    let h = harness();

    say(&h, "/menu").await;
    let sent = h.bot.take();
    assert_eq!(sent[0].text, texts::MENU_PROMPT);
    assert_eq!(sent[0].keyboard, Some(texts::menu_keyboard()));

    say(&h, texts::BUTTON_ANALYZE_CHANNEL).await;
    assert_eq!(h.bot.take()[0].text, texts::ASK_CHANNEL_FOR_ANALYSIS);

    say(&h, "https://t.me/rustnews").await;
    let sent = h.bot.take();
    assert_eq!(sent[0].text, "Вы хотите проанализировать канал @rustnews?");
    assert_eq!(sent[0].keyboard, Some(texts::confirm_keyboard()));

    let response = say(&h, texts::YES).await;
    let sent = h.bot.take();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].text, texts::WORKING);
    assert_eq!(sent[0].keyboard, Some(ReplyKeyboard::Remove));
    assert_eq!(
        sent[1].text,
        "Задача выполнена успешно!\n\nsummary for analyze_channel"
    );
    assert_eq!(response, HandlerResponse::Reply(sent[1].text.clone()));
    assert_eq!(
        *h.actions.performed.lock().unwrap(),
        vec![PendingAction::AnalyzeChannel {
            username: "rustnews".to_string()
        }]
    );

    // Back to idle: plain text is ignored.
    assert_eq!(say(&h, "hello").await, HandlerResponse::Ignore);
    assert!(h.bot.take().is_empty());
}

/// **Test: a failing action answers with the error text and resets the dialog.**
#[tokio::test]
async fn test_post_analysis_failure_reply() {
    let h = harness();

    say(&h, "/menu").await;
    say(&h, texts::BUTTON_ANALYZE_POST).await;
    say(&h, "abc").await;
    say(&h, "77").await;
    say(&h, texts::YES).await;

    let texts_sent: Vec<String> = h.bot.take().into_iter().map(|s| s.text).collect();
    assert!(texts_sent.contains(&texts::INVALID_POST_ID.to_string()));
    assert_eq!(
        texts_sent.last().unwrap(),
        "Произошла ошибка: Post with ID 77 not found\n\n\
         Пожалуйста, попробуйте еще раз или свяжитесь с администратором."
    );
    assert_eq!(say(&h, "77").await, HandlerResponse::Ignore);
}

/// **Test: Нет cancels without running anything; /cancel resets mid-dialog.**
#[tokio::test]
async fn test_decline_and_cancel() {
    let h = harness();

    say(&h, "/menu").await;
    say(&h, texts::BUTTON_SURVEY).await;
    say(&h, "@rustnews").await;
    say(&h, texts::NO).await;
    assert_eq!(h.bot.take().last().unwrap().text, texts::ACTION_CANCELLED);
    assert!(h.actions.performed.lock().unwrap().is_empty());

    say(&h, "/menu").await;
    say(&h, texts::BUTTON_CONTENT_PLAN).await;
    say(&h, "/cancel").await;
    let last = h.bot.take().pop().unwrap();
    assert_eq!(last.text, texts::CANCELLED);
    assert_eq!(last.keyboard, Some(ReplyKeyboard::Remove));
    assert_eq!(say(&h, "@rustnews").await, HandlerResponse::Ignore);
}

/// **Test: dialogs are kept per user; group chats are ignored.**
#[tokio::test]
async fn test_state_is_per_user_and_private_only() {
    let h = harness();

    h.chain
        .handle(&message(1, 1, "private", "/menu"))
        .await
        .unwrap();
    h.chain
        .handle(&message(2, 2, "private", "/help"))
        .await
        .unwrap();
    h.bot.take();

    let response = h
        .chain
        .handle(&message(2, 2, "private", texts::BUTTON_SURVEY))
        .await
        .unwrap();
    assert_eq!(response, HandlerResponse::Ignore);

    h.chain
        .handle(&message(1, 1, "private", texts::BUTTON_SURVEY))
        .await
        .unwrap();
    let sent = h.bot.take();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].chat_id, 1);
    assert_eq!(sent[0].text, texts::ASK_CHANNEL_FOR_SURVEY);

    let response = h
        .chain
        .handle(&message(-500, 1, "supergroup", "/menu"))
        .await
        .unwrap();
    assert_eq!(response, HandlerResponse::Ignore);
    assert!(h.bot.take().is_empty());
}

/// **Test: unknown commands answer without leaving the current step.**
#[tokio::test]
async fn test_unknown_command_keeps_step() {
    let h = harness();

    say(&h, "/menu").await;
    say(&h, texts::BUTTON_CONTENT_PLAN).await;
    say(&h, "/stats").await;
    assert_eq!(h.bot.take().last().unwrap().text, texts::UNKNOWN_COMMAND);

    say(&h, "rustnews").await;
    say(&h, texts::YES).await;
    assert_eq!(
        h.actions.performed.lock().unwrap().last(),
        Some(&PendingAction::ContentPlan {
            username: "rustnews".to_string(),
            days: 7
        })
    );
}
