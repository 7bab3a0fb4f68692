use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Respond with a health payload, probing the room store on the way.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    match state.store().health_check().await {
        Ok(()) => HealthResponse::ok(),
        Err(err) => {
            warn!(error = %err, "storage health check failed");
            HealthResponse::degraded()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{config::AppConfig, dao::room_store::memory::MemoryRoomStore, state::AppState};

    #[tokio::test]
    async fn in_memory_store_reports_ok() {
        let state = AppState::new(
            Arc::new(MemoryRoomStore::new()),
            AppConfig::default().into_catalog(),
        );

        let response = health_status(&state).await;
        assert_eq!(response.status, "ok");
    }
}
