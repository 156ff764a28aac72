//! Base config: application identity, logging, database. Loaded from env.

use anyhow::Result;

use super::env::{var_bool, var_or};

/// Base config shared by every mode.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// APP_NAME
    pub app_name: String,
    /// APP_VERSION
    pub app_version: String,
    /// DEBUG
    pub debug: bool,
    /// LOG_LEVEL; default filter when RUST_LOG is unset
    pub log_level: String,
    /// Log file path
    pub log_file: String,
    /// SQLite URL (`sqlite://file.db`, `sqlite::memory:`) or file path
    pub database_url: String,
}

impl BaseConfig {
    pub fn load() -> Result<Self> {
        Ok(Self {
            app_name: var_or("APP_NAME", "TG Analytics"),
            app_version: var_or("APP_VERSION", env!("CARGO_PKG_VERSION")),
            debug: var_bool("DEBUG"),
            log_level: var_or("LOG_LEVEL", "INFO"),
            log_file: var_or("LOG_FILE", "logs/tg-analytics.log"),
            database_url: var_or("DATABASE_URL", "sqlite://tg_analytics.db"),
        })
    }

    /// Tracing filter directive for `log_level`; DEBUG=true forces `debug`.
    pub fn default_filter(&self) -> String {
        if self.debug {
            "debug".to_string()
        } else {
            self.log_level.to_lowercase()
        }
    }
}
