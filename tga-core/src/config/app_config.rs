//! AppConfig: every section loaded together.

use anyhow::Result;

use super::{ApiConfig, BaseConfig, TelegramConfig};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base: BaseConfig,
    pub telegram: TelegramConfig,
    pub api: ApiConfig,
}

impl AppConfig {
    /// Load from environment variables. Load `.env` before calling.
    pub fn load() -> Result<Self> {
        Ok(Self {
            base: BaseConfig::load()?,
            telegram: TelegramConfig::load()?,
            api: ApiConfig::load()?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        self.api.validate()?;
        Ok(())
    }

    pub fn require_bot_token(&self) -> Result<&str> {
        self.telegram.require_bot_token()
    }
}
