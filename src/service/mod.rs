//! Service Module
//!
//! The cache-coordination layer between callers and the user store.

mod coordinator;

pub use coordinator::{UserCacheCoordinator, NO_DATA};
