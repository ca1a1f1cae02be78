//! Cache Key Module
//!
//! Composite keys for the user cache. Three key families share one
//! namespace; an operation on one family never touches another.

use std::fmt;
use std::sync::Arc;

// == Key Kind ==
/// Operation identity plus argument value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// A single user looked up by id
    ById(u64),
    /// The whole user collection
    All,
    /// The result of an age lookup
    ByAge(u32),
}

// == Cache Key ==
/// A `(namespace, operation, argument)` key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    namespace: Arc<str>,
    kind: KeyKind,
}

impl CacheKey {
    pub fn new(namespace: Arc<str>, kind: KeyKind) -> Self {
        Self { namespace, kind }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn kind(&self) -> KeyKind {
        self.kind
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            KeyKind::ById(id) => write!(f, "{}::id:{}", self.namespace, id),
            KeyKind::All => write!(f, "{}::all", self.namespace),
            KeyKind::ByAge(age) => write!(f, "{}::age:{}", self.namespace, age),
        }
    }
}
