//! Drives the menu dialog: loads the per-user state, applies the transition, sends the replies
//! and runs the confirmed action.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, instrument};

use crate::actions::AnalyticsActions;
use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use crate::dialog::{parse_input, transition, DialogStore, Outgoing};
use crate::texts;

pub struct DialogHandler {
    bot: Arc<dyn Bot>,
    actions: Arc<dyn AnalyticsActions>,
    store: DialogStore,
}

impl DialogHandler {
    pub fn new(bot: Arc<dyn Bot>, actions: Arc<dyn AnalyticsActions>, store: DialogStore) -> Self {
        Self {
            bot,
            actions,
            store,
        }
    }

    async fn send(&self, message: &Message, outgoing: &Outgoing) -> Result<()> {
        match &outgoing.keyboard {
            Some(keyboard) => {
                self.bot
                    .send_with_keyboard(&message.chat, &outgoing.text, keyboard)
                    .await
            }
            None => self.bot.send_message(&message.chat, &outgoing.text).await,
        }
    }
}

#[async_trait]
impl Handler for DialogHandler {
    fn name(&self) -> &'static str {
        "dialog"
    }

    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.chat.is_private() || message.content.trim().is_empty() {
            return Ok(HandlerResponse::Ignore);
        }

        let (chat_id, user_id) = (message.chat.id, message.user.id);
        let state = self.store.get(chat_id, user_id).await;
        let input = parse_input(&message.content);
        let step = transition(&state, &input);
        self.store.set(chat_id, user_id, step.next.clone()).await;

        let mut last_reply = None;
        for outgoing in &step.replies {
            self.send(message, outgoing).await?;
            last_reply = Some(outgoing.text.clone());
        }

        if let Some(action) = &step.execute {
            info!(action = action.name(), "Running confirmed action");
            let text = match self.actions.perform(action).await {
                Ok(summary) => texts::action_succeeded(&summary),
                Err(e) => {
                    error!(action = action.name(), error = %e, "Action failed");
                    texts::action_failed(&e.to_string())
                }
            };
            self.send(
                message,
                &Outgoing {
                    text: text.clone(),
                    keyboard: None,
                },
            )
            .await?;
            last_reply = Some(text);
        }

        Ok(match last_reply {
            Some(text) => HandlerResponse::Reply(text),
            None => HandlerResponse::Ignore,
        })
    }
}
