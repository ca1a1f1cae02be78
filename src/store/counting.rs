//! Store decorator that counts calls reaching the system of record.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde::Serialize;

use super::UserStore;
use crate::error::Result;
use crate::models::User;

/// Number of calls per store operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreCalls {
    pub get_by_id: u64,
    pub get_all: u64,
    pub save: u64,
    pub delete_by_id: u64,
    pub find_by_age: u64,
}

impl StoreCalls {
    pub fn total(&self) -> u64 {
        self.get_by_id + self.get_all + self.save + self.delete_by_id + self.find_by_age
    }
}

#[derive(Debug, Default)]
struct Counters {
    get_by_id: AtomicU64,
    get_all: AtomicU64,
    save: AtomicU64,
    delete_by_id: AtomicU64,
    find_by_age: AtomicU64,
}

fn bump(counter: &AtomicU64) {
    counter.fetch_add(1, Ordering::Relaxed);
}

/// Wraps a `UserStore` and counts every call before delegating.
#[derive(Debug, Default)]
pub struct CountingStore<S> {
    inner: S,
    counters: Counters,
}

impl<S: UserStore> CountingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            counters: Counters::default(),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns the calls made so far.
    pub fn calls(&self) -> StoreCalls {
        let c = &self.counters;
        StoreCalls {
            get_by_id: c.get_by_id.load(Ordering::Relaxed),
            get_all: c.get_all.load(Ordering::Relaxed),
            save: c.save.load(Ordering::Relaxed),
            delete_by_id: c.delete_by_id.load(Ordering::Relaxed),
            find_by_age: c.find_by_age.load(Ordering::Relaxed),
        }
    }
}

#[async_trait]
impl<S: UserStore> UserStore for CountingStore<S> {
    async fn get_by_id(&self, id: u64) -> Result<Option<User>> {
        bump(&self.counters.get_by_id);
        self.inner.get_by_id(id).await
    }

    async fn get_all(&self) -> Result<Vec<User>> {
        bump(&self.counters.get_all);
        self.inner.get_all().await
    }

    async fn save(&self, user: User) -> Result<User> {
        bump(&self.counters.save);
        self.inner.save(user).await
    }

    async fn delete_by_id(&self, id: u64) -> Result<()> {
        bump(&self.counters.delete_by_id);
        self.inner.delete_by_id(id).await
    }

    async fn find_by_age(&self, age: u32) -> Result<Option<User>> {
        bump(&self.counters.find_by_age);
        self.inner.find_by_age(age).await
    }
}
