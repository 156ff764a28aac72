//! Telegram connection settings: bot token, Bot API server, public preview host.

use anyhow::{bail, Result};

use super::env::{var, var_or};

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// TG_BOT_TOKEN or BOT_TOKEN
    pub bot_token: Option<String>,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// TELEGRAM_WEB_URL; host serving `/s/<channel>` previews
    pub telegram_web_url: String,
    /// CHANNEL_USERNAME; default channel for collector mode
    pub channel_username: Option<String>,
}

impl TelegramConfig {
    pub fn load() -> Result<Self> {
        Ok(Self {
            bot_token: var("TG_BOT_TOKEN").or_else(|| var("BOT_TOKEN")),
            telegram_api_url: var("TELEGRAM_API_URL").or_else(|| var("TELOXIDE_API_URL")),
            telegram_web_url: var_or("TELEGRAM_WEB_URL", "https://t.me"),
            channel_username: var("CHANNEL_USERNAME"),
        })
    }

    /// Validate config (URLs must parse if set).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if reqwest::Url::parse(&self.telegram_web_url).is_err() {
            bail!(
                "TELEGRAM_WEB_URL is not a valid URL: {}",
                self.telegram_web_url
            );
        }
        Ok(())
    }

    /// The bot token, or an error naming the variable to set.
    pub fn require_bot_token(&self) -> Result<&str> {
        match self.bot_token.as_deref() {
            Some(token) if !token.trim().is_empty() => Ok(token),
            _ => bail!("TG_BOT_TOKEN (or BOT_TOKEN) is not set"),
        }
    }
}
