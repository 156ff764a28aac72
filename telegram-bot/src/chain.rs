//! # Handler chain
//!
//! Every private message passes through three phases. All `before` hooks run in order and any
//! `false` drops the message. `handle` runs until one handler claims the message with `Stop` or
//! `Reply`. All `after` hooks then run in reverse order with the outcome.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::core::{Handler, HandlerResponse, Message, Result};

/// Ordered list of [`Handler`]s; [`crate::build_handler_chain`] assembles the bot's chain.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    #[instrument(skip_all, fields(chat_id = message.chat.id, user = %message.user.display_name()))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if let Some(vetoed_by) = self.first_veto(message).await? {
            info!(handler = vetoed_by, "Message dropped before handling");
            return Ok(HandlerResponse::Stop);
        }

        let (response, claimed_by) = self.dispatch(message).await?;
        match (&response, claimed_by) {
            (HandlerResponse::Reply(text), Some(handler)) => {
                debug!(handler, reply_chars = text.chars().count(), "Message answered")
            }
            (_, Some(handler)) => debug!(handler, "Message stopped"),
            (_, None) => debug!("No handler claimed the message"),
        }

        for handler in self.handlers.iter().rev() {
            handler.after(message, &response).await?;
        }
        Ok(response)
    }

    /// Name of the first handler whose `before` rejects the message.
    async fn first_veto(&self, message: &Message) -> Result<Option<&'static str>> {
        for handler in &self.handlers {
            if !handler.before(message).await? {
                return Ok(Some(handler.name()));
            }
        }
        Ok(None)
    }

    /// Final response and the handler that produced it; `Continue` when nobody claimed it.
    async fn dispatch(&self, message: &Message) -> Result<(HandlerResponse, Option<&'static str>)> {
        for handler in &self.handlers {
            match handler.handle(message).await? {
                HandlerResponse::Continue | HandlerResponse::Ignore => {}
                claimed => return Ok((claimed, Some(handler.name()))),
            }
        }
        Ok((HandlerResponse::Continue, None))
    }
}
