//! Error types for the user service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == User Error Enum ==
/// Unified error type for the user service.
///
/// The cache layer never produces or swallows `Store` errors; they travel
/// from the system of record to the caller unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// No record for the requested id or age
    #[error("{0}")]
    NotFound(String),

    /// The system of record failed
    #[error("Store failure: {0}")]
    Store(String),
}

impl UserError {
    /// NotFound for a user id.
    pub fn user_not_found(id: u64) -> Self {
        UserError::NotFound(format!("User not found: {}", id))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = match &self {
            UserError::NotFound(_) => StatusCode::NOT_FOUND,
            UserError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the user service.
pub type Result<T> = std::result::Result<T, UserError>;
