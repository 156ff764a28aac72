use storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("Invalid channel username: {0:?}")]
    InvalidUsername(String),

    #[error("Channel @{0} not found")]
    ChannelNotFound(String),

    #[error("{source_name} source does not support {operation}")]
    Unsupported {
        source_name: &'static str,
        operation: &'static str,
    },

    #[error("Telegram API error: {0}")]
    Telegram(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse channel page: {0}")]
    Parse(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CollectorError {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, CollectorError::Unsupported { .. })
    }
}
