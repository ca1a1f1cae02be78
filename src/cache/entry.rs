//! Cache Entry Module
//!
//! Defines the values held by the user cache. Entries carry no expiry
//! metadata and live until evicted or the process ends.

use crate::models::User;

// == Cache Entry ==
/// A cached result of one coordinator operation.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheEntry {
    /// A by-id lookup; `None` is the cached absent marker
    Record(Option<User>),
    /// A whole-collection listing
    Records(Vec<User>),
    /// An age lookup result
    Query(User),
}

impl CacheEntry {
    // == Is Absent ==
    /// Returns true when the entry carries no result at all.
    pub fn is_absent(&self) -> bool {
        matches!(self, CacheEntry::Record(None))
    }

    pub fn into_record(self) -> Option<Option<User>> {
        match self {
            CacheEntry::Record(user) => Some(user),
            _ => None,
        }
    }

    pub fn into_records(self) -> Option<Vec<User>> {
        match self {
            CacheEntry::Records(users) => Some(users),
            _ => None,
        }
    }

    pub fn into_query(self) -> Option<User> {
        match self {
            CacheEntry::Query(user) => Some(user),
            _ => None,
        }
    }
}
