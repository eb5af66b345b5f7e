//! In-memory session store.
//!
//! Sessions live for the process lifetime only; persistence across restarts
//! is an explicit non-goal. A single async RwLock serializes map access,
//! which is the per-key consistency the port requires (individual reads and
//! writes are atomic; turn-level exclusion lives in the application layer).

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::UserId;
use crate::domain::session::DeploySession;
use crate::ports::SessionStore;

/// Process-wide in-memory session map.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<UserId, DeploySession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions, for observability.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: &UserId) -> Option<DeploySession> {
        self.sessions.read().await.get(user_id).cloned()
    }

    async fn put(&self, session: DeploySession) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.user_id().clone(), session);
    }

    async fn remove(&self, user_id: &UserId) -> Option<DeploySession> {
        self.sessions.write().await.remove(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> UserId {
        UserId::new(name).unwrap()
    }

    #[tokio::test]
    async fn put_then_get_returns_the_session() {
        let store = InMemorySessionStore::new();
        let session = DeploySession::new(user("alice"));
        store.put(session.clone()).await;

        assert_eq!(store.get(&user("alice")).await, Some(session));
        assert!(store.contains(&user("alice")).await);
    }

    #[tokio::test]
    async fn put_replaces_the_existing_session() {
        let store = InMemorySessionStore::new();
        store.put(DeploySession::new(user("alice"))).await;

        let mut replacement = DeploySession::new(user("alice"));
        replacement.begin().unwrap();
        store.put(replacement.clone()).await;

        assert_eq!(store.get(&user("alice")).await, Some(replacement));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn remove_returns_and_deletes_the_session() {
        let store = InMemorySessionStore::new();
        store.put(DeploySession::new(user("alice"))).await;

        assert!(store.remove(&user("alice")).await.is_some());
        assert!(store.get(&user("alice")).await.is_none());
        assert!(store.remove(&user("alice")).await.is_none());
    }

    #[tokio::test]
    async fn sessions_are_keyed_per_user() {
        let store = InMemorySessionStore::new();
        store.put(DeploySession::new(user("alice"))).await;
        store.put(DeploySession::new(user("bob"))).await;

        assert_eq!(store.len().await, 2);
        assert!(store.get(&user("alice")).await.is_some());
        assert!(store.get(&user("bob")).await.is_some());
    }
}
