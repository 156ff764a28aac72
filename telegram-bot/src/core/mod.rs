//! Core types and traits: Handler, Bot, Message, HandlerResponse, errors.
//! Transport-agnostic; the teloxide side lives in [`crate::telegram`].

pub mod bot;
pub mod error;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, Result};
pub use types::{
    Chat, Handler, HandlerResponse, Message, ReplyKeyboard, ToCoreMessage, ToCoreUser, User,
};
