//! API Handlers
//!
//! HTTP request handlers mapping each user endpoint onto the cache
//! coordinator.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::cache::CacheStore;
use crate::error::Result;
use crate::models::{ErrorResponse, HealthResponse, StatsResponse, User, UserPatch};
use crate::service::UserCacheCoordinator;
use crate::store::{CountingStore, InMemoryUserStore};

/// Store stack used by the server: the in-memory table behind a call counter.
pub type ServerStore = CountingStore<InMemoryUserStore>;

/// Application state shared across all handlers.
///
/// Holds the one coordinator (and through it the one cache) for the process.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserCacheCoordinator<ServerStore>>,
}

impl AppState {
    /// Creates a new AppState around the given store and cache.
    pub fn new(store: InMemoryUserStore, cache: CacheStore) -> Self {
        let coordinator =
            UserCacheCoordinator::new(Arc::new(CountingStore::new(store)), Arc::new(cache));
        Self {
            users: Arc::new(coordinator),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Starts with an empty store and a cache named after `cache_name`.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(
            InMemoryUserStore::new(),
            CacheStore::new(config.cache_name.as_str()),
        )
    }
}

/// Handler for GET /api/users/:id
///
/// Responds with the user, or `null` when no user has that id.
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Option<User>>> {
    let user = state.users.get_by_id(id).await?;
    Ok(Json(user))
}

/// Handler for GET /api/users/allUsers
pub async fn all_users_handler(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = state.users.get_all().await?;
    Ok(Json(users))
}

/// Handler for POST /api/users/createUser
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> Result<Json<User>> {
    let created = state.users.create(user).await?;
    Ok(Json(created))
}

/// Handler for PUT /api/users/updateUser/:id
pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<User>> {
    let updated = state.users.update(id, patch).await?;
    Ok(Json(updated))
}

/// Handler for DELETE /api/users/deleteUser/:id
///
/// Always answers 204 with no body.
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode> {
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /api/users/age/:age
///
/// Any failure, including no match, is answered with 400 and the message.
pub async fn user_by_age_handler(
    State(state): State<AppState>,
    Path(age): Path<u32>,
) -> std::result::Result<Json<User>, (StatusCode, Json<ErrorResponse>)> {
    state
        .users
        .get_by_age(age)
        .await
        .map(Json)
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e.to_string()))))
}

/// Handler for GET /stats
///
/// Returns cache statistics and the number of calls that reached the store.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.users.cache();
    Json(StatsResponse::new(
        cache.namespace(),
        cache.stats(),
        state.users.store().calls(),
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(InMemoryUserStore::new(), CacheStore::new("userCacheData"))
    }

    #[tokio::test]
    async fn test_create_and_get_handler() {
        let state = state();

        let created = create_user_handler(State(state.clone()), Json(User::new("Ann", 30)))
            .await
            .unwrap();
        assert_eq!(created.id, Some(1));

        let fetched = get_user_handler(State(state.clone()), Path(1)).await.unwrap();
        assert_eq!(fetched.0, Some(created.0));
        assert_eq!(state.users.store().calls().get_by_id, 0);
    }

    #[tokio::test]
    async fn test_get_nonexistent_user_is_null() {
        let result = get_user_handler(State(state()), Path(9)).await.unwrap();
        assert!(result.0.is_none());
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        use crate::error::UserError;

        let result =
            update_user_handler(State(state()), Path(3), Json(UserPatch::new("X", 20))).await;
        assert!(matches!(result, Err(UserError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_handler() {
        let state = state();
        create_user_handler(State(state.clone()), Json(User::new("Ann", 30)))
            .await
            .unwrap();

        let status = delete_user_handler(State(state.clone()), Path(1)).await.unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let fetched = get_user_handler(State(state), Path(1)).await.unwrap();
        assert!(fetched.0.is_none());
    }

    #[tokio::test]
    async fn test_age_no_match_is_bad_request() {
        let (status, body) = user_by_age_handler(State(state()), Path(30))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "No Data");
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = state();
        let response = stats_handler(State(state)).await;
        assert_eq!(response.cache, "userCacheData");
        assert_eq!(response.hits, 0);
        assert_eq!(response.store_calls.total(), 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
