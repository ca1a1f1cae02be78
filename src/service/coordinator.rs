//! User Cache Coordinator
//!
//! Wraps every store operation with explicit cache read, put and evict
//! points. The per-operation policy:
//!
//! | Operation     | Cache behavior                                         |
//! |---------------|--------------------------------------------------------|
//! | `get_by_id`   | read-through, absent results cached too                |
//! | `get_all`     | read-through under one fixed key, never invalidated    |
//! | `create`      | write-through of the saved record under its id         |
//! | `update`      | evict the id after a successful save, no refill        |
//! | `delete`      | evict the id after the store delete                    |
//! | `get_by_age`  | read-through only for ages >= 18, absent never cached  |
//!
//! Mutations only touch by-id keys. A cached listing or age lookup keeps
//! serving its snapshot after users change until the process restarts.

use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::{CacheEntry, CacheStore, KeyKind, CACHEABLE_MIN_AGE};
use crate::error::{Result, UserError};
use crate::models::{User, UserPatch};
use crate::store::UserStore;

/// Message carried by `NotFound` when no user has the requested age.
pub const NO_DATA: &str = "No Data";

// == Coordinator ==
/// Cache-coordination layer in front of a `UserStore`.
///
/// The cache is injected so a single instance can be shared for the life of
/// the process. Cache guards are never held across store calls.
pub struct UserCacheCoordinator<S> {
    store: Arc<S>,
    cache: Arc<CacheStore>,
}

impl<S: UserStore> UserCacheCoordinator<S> {
    pub fn new(store: Arc<S>, cache: Arc<CacheStore>) -> Self {
        Self { store, cache }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    // == Get By Id ==
    /// Returns the user with `id`, consulting the cache first.
    ///
    /// A miss is filled with whatever the store returned, including the
    /// absent marker, so repeated lookups of a missing id stay off the store.
    pub async fn get_by_id(&self, id: u64) -> Result<Option<User>> {
        let key = self.cache.key(KeyKind::ById(id));

        if let Some(user) = self.cache.get(&key).and_then(CacheEntry::into_record) {
            return Ok(user);
        }

        let user = self.store.get_by_id(id).await?;
        self.cache.put(key, CacheEntry::Record(user.clone()));
        Ok(user)
    }

    // == Get All ==
    /// Returns every user, serving a cached listing when one exists.
    ///
    /// The listing is not refreshed by later writes and may be stale.
    pub async fn get_all(&self) -> Result<Vec<User>> {
        let key = self.cache.key(KeyKind::All);

        if let Some(users) = self.cache.get(&key).and_then(CacheEntry::into_records) {
            return Ok(users);
        }

        let users = self.store.get_all().await?;
        self.cache.put(key, CacheEntry::Records(users.clone()));
        Ok(users)
    }

    // == Create ==
    /// Saves `user` and writes the saved record into the cache under its id.
    pub async fn create(&self, user: User) -> Result<User> {
        let saved = self.store.save(user).await?;

        // A store that returns no id leaves nothing to key on
        let id = saved
            .id
            .ok_or_else(|| UserError::Store("saved user has no id".to_string()))?;

        self.cache
            .put(self.cache.key(KeyKind::ById(id)), CacheEntry::Record(Some(saved.clone())));

        info!(id, "user created");
        Ok(saved)
    }

    // == Update ==
    /// Applies `patch` to the stored user and invalidates its cached entry.
    ///
    /// The entry is evicted, not refreshed: the next `get_by_id` reloads it.
    /// Nothing is evicted when the user is missing or the save fails.
    pub async fn update(&self, id: u64, patch: UserPatch) -> Result<User> {
        let mut existing = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| UserError::user_not_found(id))?;

        existing.apply(patch);
        let updated = self.store.save(existing).await?;

        self.cache.evict(&self.cache.key(KeyKind::ById(id)));

        info!(id, "user updated");
        Ok(updated)
    }

    // == Delete ==
    /// Deletes the user and evicts its cached entry.
    ///
    /// Existence is not checked; deleting a missing id still evicts.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.store.delete_by_id(id).await?;
        self.cache.evict(&self.cache.key(KeyKind::ById(id)));

        info!(id, "user deleted");
        Ok(())
    }

    // == Get By Age ==
    /// Returns a user with the given age.
    ///
    /// Ages below `CACHEABLE_MIN_AGE` skip the cache for both reads and
    /// writes. A result is only cached when it is present.
    pub async fn get_by_age(&self, age: u32) -> Result<User> {
        if age < CACHEABLE_MIN_AGE {
            debug!(age, "age below cacheable minimum, bypassing cache");
            return self.load_by_age(age).await;
        }

        let key = self.cache.key(KeyKind::ByAge(age));

        if let Some(user) = self.cache.get(&key).and_then(CacheEntry::into_query) {
            return Ok(user);
        }

        let user = self.load_by_age(age).await?;

        let entry = CacheEntry::Query(user.clone());
        // Never rejects: a lookup with no match already returned NotFound above
        if entry.is_absent() {
            debug!(age, "absent age lookup not cached");
        } else {
            self.cache.put(key, entry);
        }

        Ok(user)
    }

    async fn load_by_age(&self, age: u32) -> Result<User> {
        self.store
            .find_by_age(age)
            .await?
            .ok_or_else(|| UserError::NotFound(NO_DATA.to_string()))
    }
}
