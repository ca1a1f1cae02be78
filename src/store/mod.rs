//! Store Module
//!
//! The system of record for users. Nothing here caches; every call reaches
//! the backing storage.

mod counting;
mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::User;

pub use counting::{CountingStore, StoreCalls};
pub use memory::InMemoryUserStore;

/// Durable CRUD over users plus a secondary lookup by age.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Finds a user by id.
    async fn get_by_id(&self, id: u64) -> Result<Option<User>>;

    /// Lists every user.
    async fn get_all(&self) -> Result<Vec<User>>;

    /// Inserts or replaces a user and returns it with its id populated.
    async fn save(&self, user: User) -> Result<User>;

    /// Deletes a user by id. Deleting a missing id is a no-op.
    async fn delete_by_id(&self, id: u64) -> Result<()>;

    /// Finds a user with the given age.
    async fn find_by_age(&self, age: u32) -> Result<Option<User>>;
}
