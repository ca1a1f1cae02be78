//! Data model and response types for the user service API
//!
//! `User` doubles as the stored record and the JSON body of create/read
//! operations; `UserPatch` is the update body.

pub mod responses;
pub mod user;

// Re-export commonly used types
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
pub use user::{User, UserPatch};
