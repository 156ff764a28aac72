//! # tga-core
//!
//! Pieces shared by every tg-analytics crate: environment configuration ([`AppConfig`]),
//! tracing initialization and channel username normalization.

pub mod config;
pub mod logger;
pub mod username;

pub use config::{ApiConfig, AppConfig, BaseConfig, TelegramConfig};
pub use logger::init_tracing;
pub use username::normalize_channel_username;
