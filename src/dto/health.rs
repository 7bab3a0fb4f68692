use serde::Serialize;
use utoipa::ToSchema;

/// Health report returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Overall status ("ok" or "degraded").
    pub status: String,
}

impl HealthResponse {
    /// Report a healthy backend whose room store answered the ping.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }

    /// Report a backend whose room store failed its last ping.
    pub fn degraded() -> Self {
        Self {
            status: "degraded".to_string(),
        }
    }
}
