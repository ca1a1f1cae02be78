//! User Cache - a REST user service with a read-through in-process cache
//!
//! Users live in a system of record behind the `UserStore` trait; the
//! `UserCacheCoordinator` decides which operations read, fill or evict the
//! shared cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use error::{Result, UserError};
pub use service::UserCacheCoordinator;
