//! Chat identity type for core messages.

use serde::{Deserialize, Serialize};

/// Chat identity. `chat_type` is `private`, `group`, `supergroup` or `channel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

impl Chat {
    pub fn is_private(&self) -> bool {
        self.chat_type == "private"
    }
}
