//! Small helpers over `std::env` shared by the config sections.

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Value of `key`, or `None` when unset or blank.
pub(crate) fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

pub(crate) fn var_or(key: &str, default: &str) -> String {
    var(key).unwrap_or_else(|| default.to_string())
}

/// `true`, `1` and `t` (any case) are true; anything else is false.
pub(crate) fn var_bool(key: &str) -> bool {
    var(key)
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "true" | "1" | "t"))
        .unwrap_or(false)
}

/// Parses `key` when set; a malformed value is an error rather than a silent default.
pub(crate) fn var_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {}", key, raw)),
        None => Ok(default),
    }
}
