//! Per-user turn locks.
//!
//! Turns for the same user must run strictly one at a time: session read,
//! validation, mutation, and any triggered generation form one critical
//! section keyed by user id. Turns for different users proceed
//! concurrently.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::foundation::UserId;

/// Keyed async mutex map.
///
/// Lock entries are created on first use and kept for the process lifetime;
/// the per-user footprint is one Arc'd mutex.
#[derive(Debug, Clone, Default)]
pub struct TurnLocks {
    inner: Arc<Mutex<HashMap<UserId, Arc<Mutex<()>>>>>,
}

impl TurnLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock for one user's turn, waiting if a turn is already
    /// in flight for that user.
    pub async fn acquire(&self, user_id: &UserId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.inner.lock().await;
            map.entry(user_id.clone())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}
