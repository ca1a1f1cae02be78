//! Cache Module
//!
//! Provides the in-process user cache: composite keys, entries and a
//! concurrent store with no expiry and no eviction policy.

mod entry;
mod key;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use key::{CacheKey, KeyKind};
pub use stats::{CacheStats, StatsRecorder};
pub use store::CacheStore;

// == Public Constants ==
/// Namespace used for user entries unless configured otherwise
pub const DEFAULT_CACHE_NAME: &str = "userCacheData";

/// Age lookups below this value bypass the cache entirely
pub const CACHEABLE_MIN_AGE: u32 = 18;
