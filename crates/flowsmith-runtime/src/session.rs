//! Session-keyed conversation history for simulated executions.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::TRACING_TARGET;

/// Maximum history entries kept per session (ten exchanges).
pub const MAX_HISTORY_MESSAGES: usize = 20;

/// Speaker role of a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChatRole {
    /// Message sent by the user.
    User,
    /// Simulated model response.
    Assistant,
}

/// One entry in a session's conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who produced the entry.
    pub role: ChatRole,
    /// Entry text.
    pub content: String,
}

impl ChatMessage {
    /// Creates a user entry.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// Creates an assistant entry.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Conversation histories keyed by session identifier.
///
/// Histories are created on first use and bounded to
/// [`MAX_HISTORY_MESSAGES`] entries, evicting oldest-first only after a
/// full exchange has been appended. The store is shared application
/// state, injected explicitly rather than kept in a module global.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Vec<ChatMessage>>>>,
}

impl SessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user/assistant exchange to `session_id`, then trims the
    /// history to the cap.
    ///
    /// Runs under one write lock so concurrent appends cannot interleave
    /// inside an exchange, and eviction never runs before the new pair is
    /// in place.
    pub async fn append_exchange(
        &self,
        session_id: &str,
        user: impl Into<String>,
        assistant: impl Into<String>,
    ) {
        let mut sessions = self.sessions.write().await;
        let history = sessions.entry(session_id.to_owned()).or_default();

        history.push(ChatMessage::user(user));
        history.push(ChatMessage::assistant(assistant));

        if history.len() > MAX_HISTORY_MESSAGES {
            let excess = history.len() - MAX_HISTORY_MESSAGES;
            history.drain(..excess);
        }
    }

    /// Returns a snapshot of the session's history; empty when the
    /// session is unknown.
    pub async fn history(&self, session_id: &str) -> Vec<ChatMessage> {
        self.sessions
            .read()
            .await
            .get(session_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Empties the session's history.
    ///
    /// Unknown sessions are a no-op; clearing always succeeds.
    pub async fn clear(&self, session_id: &str) {
        if let Some(history) = self.sessions.write().await.get_mut(session_id) {
            history.clear();
        }
        tracing::debug!(
            target: TRACING_TARGET,
            session = session_id,
            "cleared conversation history"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn history_is_created_on_first_use() {
        let store = SessionStore::new();
        store.append_exchange("alpha", "hi", "hello").await;

        let history = store.history("alpha").await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], ChatMessage::user("hi"));
        assert_eq!(history[1], ChatMessage::assistant("hello"));
    }

    #[tokio::test]
    async fn cap_keeps_the_twenty_most_recent_entries() {
        let store = SessionStore::new();
        for exchange in 1..=12 {
            store
                .append_exchange(
                    "alpha",
                    format!("question {exchange}"),
                    format!("answer {exchange}"),
                )
                .await;
        }

        let history = store.history("alpha").await;
        assert_eq!(history.len(), MAX_HISTORY_MESSAGES);
        assert_eq!(history[0], ChatMessage::user("question 3"));
        assert_eq!(history[19], ChatMessage::assistant("answer 12"));
    }

    #[tokio::test]
    async fn sessions_do_not_interfere() {
        let store = SessionStore::new();
        store.append_exchange("alpha", "a", "1").await;
        store.append_exchange("beta", "b", "2").await;

        assert_eq!(store.history("alpha").await.len(), 2);
        assert_eq!(store.history("beta").await.len(), 2);
        assert_eq!(store.history("beta").await[0], ChatMessage::user("b"));
    }

    #[tokio::test]
    async fn clear_empties_only_the_named_session() {
        let store = SessionStore::new();
        store.append_exchange("alpha", "a", "1").await;
        store.append_exchange("beta", "b", "2").await;

        store.clear("alpha").await;
        assert!(store.history("alpha").await.is_empty());
        assert_eq!(store.history("beta").await.len(), 2);
    }

    #[tokio::test]
    async fn clearing_an_unknown_session_is_a_no_op() {
        let store = SessionStore::new();
        store.clear("missing").await;
        assert!(store.history("missing").await.is_empty());
    }
}
