use axum::Router;

use crate::state::SharedState;

pub mod catalog;
pub mod chips;
pub mod docs;
pub mod health;
pub mod rooms;
pub mod scores;
pub mod sse;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(rooms::router())
        .merge(scores::router())
        .merge(chips::router())
        .merge(catalog::router())
        .merge(sse::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
