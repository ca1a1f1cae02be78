//! Response DTOs for the user service API
//!
//! Defines the structure of outgoing HTTP response bodies that are not
//! user records themselves.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::store::StoreCalls;

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Cache namespace
    pub cache: String,
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries written to the cache
    pub puts: u64,
    /// Number of entries removed by eviction
    pub evictions: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Calls that reached the system of record
    pub store_calls: StoreCalls,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics and store counters
    pub fn new(cache: impl Into<String>, stats: CacheStats, store_calls: StoreCalls) -> Self {
        Self {
            cache: cache.into(),
            hits: stats.hits,
            misses: stats.misses,
            puts: stats.puts,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            store_calls,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for failures answered outside `UserError`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            puts: 20,
            evictions: 5,
            total_entries: 15,
        };
        let resp = StatsResponse::new("userCacheData", stats, StoreCalls::default());
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.cache, "userCacheData");
    }

    #[test]
    fn test_stats_response_serialize() {
        let resp = StatsResponse::new("users", CacheStats::default(), StoreCalls::default());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["hit_rate"], 0.0);
        assert_eq!(json["store_calls"]["get_by_id"], 0);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("No Data");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"error":"No Data"}"#);
    }
}
