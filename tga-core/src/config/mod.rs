//! Application configuration: BaseConfig (app, logging, DB) + TelegramConfig + ApiConfig.
//!
//! LLM settings live in the llm-client crate (`EnvLlmConfig`).

mod api;
mod app_config;
mod base;
mod env;
mod telegram;


pub use api::ApiConfig;
pub use app_config::AppConfig;
pub use base::BaseConfig;
pub use telegram::TelegramConfig;
