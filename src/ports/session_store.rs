//! Session Store Port - process-wide keyed dialogue state.
//!
//! One session per user id; the dialogue service is the only writer. The
//! store must serialize per-key reads and writes; turn-level mutual
//! exclusion (one turn at a time per user) is layered on top by the
//! application's keyed locks.

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::domain::session::DeploySession;

/// Port for session storage keyed by user id.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns a snapshot of the user's session, if any.
    async fn get(&self, user_id: &UserId) -> Option<DeploySession>;

    /// Inserts or replaces the user's session.
    async fn put(&self, session: DeploySession);

    /// Removes and returns the user's session.
    async fn remove(&self, user_id: &UserId) -> Option<DeploySession>;

    /// Returns true if the user currently has a session.
    async fn contains(&self, user_id: &UserId) -> bool {
        self.get(user_id).await.is_some()
    }
}
