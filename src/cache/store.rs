//! Cache Store Module
//!
//! Concurrent key-value map backing the user cache. Each operation locks a
//! single DashMap shard, so unrelated keys never serialize on each other.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::cache::{CacheEntry, CacheKey, CacheStats, KeyKind, StatsRecorder};

// == Cache Store ==
/// Named in-process cache with atomic per-key get, put and evict.
///
/// There is no TTL and no capacity bound: entries stay until evicted.
#[derive(Debug)]
pub struct CacheStore {
    /// Namespace shared by all keys built through this store
    namespace: Arc<str>,
    /// Key-value storage
    entries: DashMap<CacheKey, CacheEntry>,
    /// Performance statistics
    stats: StatsRecorder,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty cache for the given namespace.
    pub fn new(namespace: impl Into<Arc<str>>) -> Self {
        Self {
            namespace: namespace.into(),
            entries: DashMap::new(),
            stats: StatsRecorder::new(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    // == Key ==
    /// Builds a key in this cache's namespace.
    pub fn key(&self, kind: KeyKind) -> CacheKey {
        CacheKey::new(Arc::clone(&self.namespace), kind)
    }

    // == Get ==
    /// Returns a copy of the entry under `key`, if any.
    ///
    /// The shard guard is released before returning, so callers may hold the
    /// result across `.await` points.
    pub fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        let entry = self.entries.get(key).map(|e| e.value().clone());
        match entry {
            Some(_) => {
                self.stats.record_hit();
                debug!(key = %key, "cache hit");
            }
            None => {
                self.stats.record_miss();
                debug!(key = %key, "cache miss");
            }
        }
        entry
    }

    // == Put ==
    /// Stores `entry` under `key`, replacing any previous entry.
    pub fn put(&self, key: CacheKey, entry: CacheEntry) {
        debug!(key = %key, "cache put");
        self.entries.insert(key, entry);
        self.stats.record_put();
    }

    // == Evict ==
    /// Removes the entry under `key`. Returns true if one was present.
    pub fn evict(&self, key: &CacheKey) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.record_eviction();
        }
        debug!(key = %key, removed, "cache evict");
        removed
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
