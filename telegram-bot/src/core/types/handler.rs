//! The [`Handler`] trait the chain drives, plus the conversions transports implement to feed it.

use async_trait::async_trait;

use super::{message::Message, response::HandlerResponse, user::User};
use crate::core::error::Result;

/// Maps a transport user (e.g. a teloxide `User`) onto the bot's [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Maps a transport message onto the bot's [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// One stage of the private-chat pipeline.
///
/// Every hook has a default, so a handler implements only the phases it cares about:
/// `before` can veto the message, `handle` answers it, `after` sees the final outcome.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Short label used in chain logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Returning `false` drops the message; no handler's `handle` runs.
    async fn before(&self, _message: &Message) -> Result<bool> {
        Ok(true)
    }

    /// `Stop` or `Reply` claims the message; later handlers are skipped.
    async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }

    async fn after(&self, _message: &Message, _response: &HandlerResponse) -> Result<()> {
        Ok(())
    }
}
