//! In-memory system of record.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::UserStore;
use crate::error::{Result, UserError};
use crate::models::User;

/// Sequence value once `u64::MAX` has been handed out. Id 0 is never assigned.
const EXHAUSTED: u64 = 0;

fn after(id: u64) -> u64 {
    id.checked_add(1).unwrap_or(EXHAUSTED)
}

/// Process-local user table with a monotonically increasing id sequence.
///
/// Ids start at 1. Saving a user with an explicit id moves the sequence past
/// it so later inserts never collide. Once the sequence passes `u64::MAX`
/// inserts without an id fail instead of wrapping onto existing users.
#[derive(Debug)]
pub struct InMemoryUserStore {
    users: RwLock<BTreeMap<u64, User>>,
    next_id: AtomicU64,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get_by_id(&self, id: u64) -> Result<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<User>> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn save(&self, mut user: User) -> Result<User> {
        let id = match user.id {
            Some(id) => {
                let floor = after(id);
                // Err only means the sequence is already past `id`
                let _ = self
                    .next_id
                    .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |next| {
                        match (next, floor) {
                            (EXHAUSTED, _) => None,
                            (_, EXHAUSTED) => Some(EXHAUSTED),
                            (next, floor) if floor > next => Some(floor),
                            _ => None,
                        }
                    });
                id
            }
            None => self
                .next_id
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |next| {
                    (next != EXHAUSTED).then(|| after(next))
                })
                .map_err(|_| UserError::Store("user id sequence exhausted".to_string()))?,
        };
        user.id = Some(id);

        self.users.write().await.insert(id, user.clone());
        debug!(id, "user saved");
        Ok(user)
    }

    async fn delete_by_id(&self, id: u64) -> Result<()> {
        let removed = self.users.write().await.remove(&id).is_some();
        debug!(id, removed, "user deleted");
        Ok(())
    }

    async fn find_by_age(&self, age: u32) -> Result<Option<User>> {
        // BTreeMap iterates in id order, so the lowest id wins
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.age == age)
            .cloned())
    }
}
