//! HTTP API settings.

use anyhow::{bail, Result};

use super::env::{var_or, var_parse};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API_PREFIX, e.g. `/api/v1`
    pub prefix: String,
    /// API_HOST
    pub host: String,
    /// API_PORT
    pub port: u16,
}

impl ApiConfig {
    pub fn load() -> Result<Self> {
        Ok(Self {
            prefix: normalize_prefix(&var_or("API_PREFIX", "/api/v1")),
            host: var_or("API_HOST", "0.0.0.0"),
            port: var_parse("API_PORT", 8000)?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            bail!("API_PORT must be greater than zero");
        }
        Ok(())
    }

    /// `host:port` for binding the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Leading slash, no trailing slash; `/` and empty become an empty prefix.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
