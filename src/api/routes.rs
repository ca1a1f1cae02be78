//! API Routes
//!
//! Configures the Axum router with all user service endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    all_users_handler, create_user_handler, delete_user_handler, get_user_handler,
    health_handler, stats_handler, update_user_handler, user_by_age_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let users = Router::new()
        .route("/allUsers", get(all_users_handler))
        .route("/createUser", post(create_user_handler))
        .route("/updateUser/:id", put(update_user_handler))
        .route("/deleteUser/:id", delete(delete_user_handler))
        .route("/age/:age", get(user_by_age_handler))
        .route("/:id", get(get_user_handler));

    Router::new()
        .nest("/api/users", users)
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
