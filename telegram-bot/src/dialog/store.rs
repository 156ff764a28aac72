use std::collections::HashMap;

use tokio::sync::RwLock;

use super::DialogState;

/// Dialog state per (chat id, user id). Missing entries are [`DialogState::Idle`].
#[derive(Default)]
pub struct DialogStore {
    states: RwLock<HashMap<(i64, i64), DialogState>>,
}

impl DialogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, chat_id: i64, user_id: i64) -> DialogState {
        self.states
            .read()
            .await
            .get(&(chat_id, user_id))
            .cloned()
            .unwrap_or_default()
    }

    /// Stores `state`; `Idle` removes the entry.
    pub async fn set(&self, chat_id: i64, user_id: i64, state: DialogState) {
        let mut states = self.states.write().await;
        if state == DialogState::Idle {
            states.remove(&(chat_id, user_id));
        } else {
            states.insert((chat_id, user_id), state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::ChannelAction;

    #[tokio::test]
    async fn test_states_are_per_chat_and_user() {
        let store = DialogStore::new();
        store.set(1, 10, DialogState::Menu).await;
        store
            .set(1, 11, DialogState::AwaitingChannel(ChannelAction::Survey))
            .await;

        assert_eq!(store.get(1, 10).await, DialogState::Menu);
        assert_eq!(
            store.get(1, 11).await,
            DialogState::AwaitingChannel(ChannelAction::Survey)
        );
        assert_eq!(store.get(2, 10).await, DialogState::Idle);

        store.set(1, 10, DialogState::Idle).await;
        assert!(!store.states.read().await.contains_key(&(1, 10)));
        assert_eq!(store.states.read().await.len(), 1);
    }
}
